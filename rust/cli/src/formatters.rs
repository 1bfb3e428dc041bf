//! Card, event and field formatters for the `inspect` report.
//!
//! Cards use Unicode suit symbols where the terminal supports them and the
//! hand-history letters (`h d c s`) otherwise. Null cards print as `??`.
//!
//! ## Example
//!
//! ```rust
//! use phhforge_engine::cards::parse_card;
//! use phhforge_cli::formatters::{format_card, format_board};
//!
//! let ace = parse_card("As");
//! assert!(format_card(ace) == "A♠" || format_card(ace) == "As");
//! assert_eq!(format_card(None), "??");
//! assert!(format_board(&[ace]).starts_with("[A"));
//! ```

use phhforge_engine::actions::{ActionEvent, Decision};
use phhforge_engine::cards::{Card, Suit};
use phhforge_engine::record::FieldValue;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.as_char().to_string()
    }
}

pub fn format_card(card: Option<Card>) -> String {
    match card {
        Some(c) => format!("{}{}", c.rank.as_char(), format_suit(c.suit)),
        None => "??".to_string(),
    }
}

/// Board in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Option<Card>]) -> String {
    let formatted: Vec<String> = cards.iter().copied().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_decision(decision: &Decision) -> String {
    match decision {
        Decision::Fold => "fold".to_string(),
        Decision::CheckCall => "check/call".to_string(),
        Decision::Raise { amount } => format!("raise to {}", amount),
    }
}

/// One event as `seat verb ...`, dealer events as `dealer ...`.
pub fn format_event(event: &ActionEvent) -> String {
    match event {
        ActionEvent::DealHole { player, cards } => {
            format!("dealer deals {} {}", player, format_board(cards))
        }
        ActionEvent::DealBoard { cards } => format!("dealer deals board {}", format_board(cards)),
        ActionEvent::ShowCards { player, cards } => {
            format!("{} shows {}", player, format_board(cards))
        }
        other => match other.decision() {
            Some((player, decision)) => format!("{} {}", player, format_decision(&decision)),
            None => String::new(),
        },
    }
}

pub fn format_field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Int(n) => n.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Str(s) => s.clone(),
        FieldValue::IntList(items) => format!(
            "[{}]",
            items.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
        ),
        FieldValue::StrList(items) => format!("[{}]", items.join(", ")),
    }
}
