//! Handlers run by the handler chain, one per interaction kind, plus event logging.

mod callback_handler;
mod command_handler;
mod inline_handler;
mod logging_handler;
mod ticker_handler;

pub use callback_handler::CallbackHandler;
pub use command_handler::{CommandHandler, CHECK_COMMAND, HELP_COMMAND, START_COMMAND};
pub use inline_handler::InlineTickerHandler;
pub use logging_handler::LoggingHandler;
pub use ticker_handler::TickerHandler;
