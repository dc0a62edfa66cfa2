//! Reply formatting for ticker snapshots and top-N rankings.
//!
//! Output uses Telegram's legacy Markdown: bold is a `*...*` pair. Numbers are printed with Rust's
//! default float formatting, no rounding.

use std::fmt::Write;

use crate::types::{RankedList, TickerSnapshot};

/// Wraps `text` in the bold delimiter pair.
pub fn bold(text: &str) -> String {
    format!("*{}*", text)
}

/// Plain `Name (SYMBOL)` header, used as inline article title.
pub fn ticker_title(ticker: &TickerSnapshot) -> String {
    format!("{} ({})", ticker.name, ticker.symbol)
}

/// Ticker block: header, price, rank, circulating supply, market cap, 24h and 7d change, one per line.
pub fn ticker_text(ticker: &TickerSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", bold(&ticker_title(ticker)));
    let _ = writeln!(out, "{} {}", bold("Price:"), ticker.price);
    let _ = writeln!(out, "{} {}", bold("Rank:"), ticker.rank);
    let _ = writeln!(
        out,
        "{} {}",
        bold("Circulating supply:"),
        ticker.circulating_supply
    );
    let _ = writeln!(out, "{} {}", bold("MarketCap:"), ticker.market_cap);
    let _ = writeln!(
        out,
        "{} {}",
        bold("24H change (perc.):"),
        ticker.percent_change_24h
    );
    let _ = writeln!(
        out,
        "{} {}",
        bold("7D change (perc.):"),
        ticker.percent_change_7d
    );
    out
}

/// Ranking block: `Top N:` header, then `rank) SYMBOL = price` per entry.
pub fn top_text(list: &RankedList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", bold(&format!("Top {}:", list.limit)));
    for entry in &list.entries {
        let _ = writeln!(out, "{}) {} = {}", entry.rank, entry.symbol, entry.price);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RankedEntry;

    fn btc() -> TickerSnapshot {
        TickerSnapshot {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            rank: 1,
            price: 64250.5,
            market_cap: 1265000000000.0,
            circulating_supply: 19687000.0,
            percent_change_24h: -1.25,
            percent_change_7d: 3.5,
        }
    }

    #[test]
    fn test_ticker_text_field_order() {
        let text = ticker_text(&btc());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "*Bitcoin (BTC)*",
                "",
                "*Price:* 64250.5",
                "*Rank:* 1",
                "*Circulating supply:* 19687000",
                "*MarketCap:* 1265000000000",
                "*24H change (perc.):* -1.25",
                "*7D change (perc.):* 3.5",
            ]
        );
    }

    #[test]
    fn test_ticker_text_is_deterministic() {
        let ticker = btc();
        assert_eq!(ticker_text(&ticker), ticker_text(&ticker));
    }

    #[test]
    fn test_ticker_title() {
        assert_eq!(ticker_title(&btc()), "Bitcoin (BTC)");
    }

    #[test]
    fn test_top_text() {
        let list = RankedList::new(
            3,
            vec![
                RankedEntry {
                    rank: 1,
                    symbol: "BTC".to_string(),
                    price: 64250.5,
                },
                RankedEntry {
                    rank: 2,
                    symbol: "ETH".to_string(),
                    price: 3100.0,
                },
                RankedEntry {
                    rank: 3,
                    symbol: "USDT".to_string(),
                    price: 1.0001,
                },
            ],
        );
        assert_eq!(
            top_text(&list),
            "*Top 3:*\n1) BTC = 64250.5\n2) ETH = 3100\n3) USDT = 1.0001\n"
        );
    }

    #[test]
    fn test_top_text_empty_list_keeps_header() {
        let list = RankedList::new(5, Vec::new());
        assert_eq!(top_text(&list), "*Top 5:*\n");
    }
}
