//! Fixed reply texts. Owned by the dispatch loop and shared read-only with handlers.

/// Welcome text for `/start`.
pub const START_TEXT: &str = "Hi. I am BearBeardBot.\n\
    I can help you check cryptocurrency via CoinMarketCap.\n\
    Type /help to learn my commands.";

/// Help text for `/help`.
pub const HELP_TEXT: &str = "You can type a ticker name in input field to get info about that ticker \
    or you can use one of these commands:\n\n\
    /check - reveal options to check top currency";

pub const UNKNOWN_COMMAND_TEXT: &str =
    "Sorry, I can't remember this command. Please, try another one or type /help.";

/// Body of the `/check` reply carrying the limit keyboard.
pub const CHECK_TEXT: &str = "Check top";

pub const ERROR_TITLE: &str = "Error";

/// Generic failure text; the same for chat and inline replies whatever the cause.
pub const ERROR_TEXT: &str = "Sorry, something goes wrong with me. You took an error.";

/// Immutable set of reply texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replies {
    pub start: String,
    pub help: String,
    pub unknown_command: String,
    pub check: String,
    pub error_title: String,
    pub error_text: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            start: START_TEXT.to_string(),
            help: HELP_TEXT.to_string(),
            unknown_command: UNKNOWN_COMMAND_TEXT.to_string(),
            check: CHECK_TEXT.to_string(),
            error_title: ERROR_TITLE.to_string(),
            error_text: ERROR_TEXT.to_string(),
        }
    }
}
