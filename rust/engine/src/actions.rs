//! Interpretation of raw action tokens into typed [`ActionEvent`]s.
//!
//! Two token layouts occur in hand histories: dealer actions put the operator
//! before its operands (`d dh p1 AhKs`, `d db Jc8d2s`) while player actions put
//! the seat first (`p1 cbr 600`). Deals are recognised by a leading `d` followed
//! by `dh`/`db`; player actions by an operator found in the slots allowed by the
//! active [`Dialect`]. Anything else is skipped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

use crate::cards::{parse_card, parse_card_pair, split_card_pair, Card};
use crate::errors::HandError;

/// Zero-based seat index, written `p1`, `p2`, ... in hand histories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Seat(pub usize);

impl Seat {
    /// Parses a one-based `p<N>` label.
    pub fn parse(label: &str) -> Option<Seat> {
        let n: usize = label.strip_prefix('p')?.parse().ok()?;
        n.checked_sub(1).map(Seat)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0 + 1)
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Seat::parse(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid seat label '{}'", label)))
    }
}

/// A player decision: the actions that produce training snapshots.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    Fold,
    CheckCall,
    /// Complete, bet or raise to the given total.
    Raise { amount: u64 },
}

/// One interpreted action token. Order is the only notion of time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionEvent {
    #[serde(rename = "deal_hole_cards")]
    DealHole {
        player: Seat,
        cards: [Option<Card>; 2],
    },
    DealBoard {
        cards: Vec<Option<Card>>,
    },
    Fold {
        player: Seat,
    },
    CheckCall {
        player: Seat,
    },
    Raise {
        player: Seat,
        amount: u64,
    },
    ShowCards {
        player: Seat,
        cards: Vec<Option<Card>>,
    },
}

impl ActionEvent {
    /// The seat and decision for fold, check/call and raise events.
    pub fn decision(&self) -> Option<(Seat, Decision)> {
        match *self {
            ActionEvent::Fold { player } => Some((player, Decision::Fold)),
            ActionEvent::CheckCall { player } => Some((player, Decision::CheckCall)),
            ActionEvent::Raise { player, amount } => Some((player, Decision::Raise { amount })),
            _ => None,
        }
    }
}

/// Token layout accepted for player actions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Operator in token 1 or 2 (`p1 f`, `p1 x f`).
    #[default]
    Lenient,
    /// Operator strictly in token 1 (`p1 f`).
    Positional,
}

/// Where player-action operators may appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRules {
    operator_slots: RangeInclusive<usize>,
}

impl DispatchRules {
    pub fn for_dialect(dialect: Dialect) -> Self {
        let operator_slots = match dialect {
            Dialect::Lenient => 1..=2,
            Dialect::Positional => 1..=1,
        };
        Self { operator_slots }
    }

    fn find(&self, parts: &[&str], code: &str) -> Option<usize> {
        self.operator_slots
            .clone()
            .find(|&slot| parts.get(slot) == Some(&code))
    }
}

impl Default for DispatchRules {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Fold,
    CheckCall,
    CompleteBetRaise,
    ShowMuck,
}

// Checked in this order; the first operator present in an allowed slot wins.
const OPERATORS: [(&str, Operator); 4] = [
    ("f", Operator::Fold),
    ("cc", Operator::CheckCall),
    ("cbr", Operator::CompleteBetRaise),
    ("sm", Operator::ShowMuck),
];

/// Events decoded from a token list, plus the soft conditions met on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation {
    pub events: Vec<ActionEvent>,
    pub issues: Vec<HandError>,
}

/// Turns raw action tokens into [`ActionEvent`]s under a set of [`DispatchRules`].
///
/// # Examples
///
/// ```
/// use phhforge_engine::actions::{ActionEvent, ActionInterpreter, Seat};
///
/// let tokens = vec!["d dh p1 AhKs".to_string(), "p1 f".to_string(), "p1 shows".to_string()];
/// let out = ActionInterpreter::default().interpret(&tokens);
/// assert_eq!(out.events.len(), 2);
/// assert_eq!(out.events[1], ActionEvent::Fold { player: Seat(0) });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionInterpreter {
    rules: DispatchRules,
}

impl ActionInterpreter {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            rules: DispatchRules::for_dialect(dialect),
        }
    }

    pub fn interpret<S: AsRef<str>>(&self, tokens: &[S]) -> Interpretation {
        let mut out = Interpretation::default();
        for token in tokens {
            let token = token.as_ref();
            match self.interpret_token(token, &mut out.issues) {
                Some(event) => out.events.push(event),
                None => tracing::debug!(token, "skipping action token"),
            }
        }
        out
    }

    fn interpret_token(&self, token: &str, issues: &mut Vec<HandError>) -> Option<ActionEvent> {
        let parts: Vec<&str> = token.split_whitespace().collect();
        match parts.as_slice() {
            ["d", "dh", rest @ ..] => deal_hole(token, rest, issues),
            ["d", "db", rest @ ..] => Some(ActionEvent::DealBoard {
                cards: rest
                    .iter()
                    .flat_map(|run| card_run(run, issues))
                    .collect(),
            }),
            [first, ..] => self.player_action(token, first, &parts, issues),
            [] => None,
        }
    }

    fn player_action(
        &self,
        token: &str,
        first: &str,
        parts: &[&str],
        issues: &mut Vec<HandError>,
    ) -> Option<ActionEvent> {
        let (slot, op) = OPERATORS
            .iter()
            .find_map(|&(code, op)| self.rules.find(parts, code).map(|slot| (slot, op)))?;
        let Some(player) = Seat::parse(first) else {
            issues.push(malformed_action(token));
            return None;
        };
        let operand = parts.get(slot + 1).copied();
        match op {
            Operator::Fold => Some(ActionEvent::Fold { player }),
            Operator::CheckCall => Some(ActionEvent::CheckCall { player }),
            Operator::CompleteBetRaise => match operand.and_then(|a| a.parse::<u64>().ok()) {
                Some(amount) => Some(ActionEvent::Raise { player, amount }),
                None => {
                    issues.push(malformed_action(token));
                    None
                }
            },
            Operator::ShowMuck => Some(ActionEvent::ShowCards {
                player,
                cards: operand
                    .map(|cards| card_pair(cards, issues).to_vec())
                    .unwrap_or_default(),
            }),
        }
    }
}

/// Interprets tokens with the default (lenient) rules, dropping the issue list.
pub fn interpret_actions<S: AsRef<str>>(tokens: &[S]) -> Vec<ActionEvent> {
    ActionInterpreter::default().interpret(tokens).events
}

fn deal_hole(token: &str, rest: &[&str], issues: &mut Vec<HandError>) -> Option<ActionEvent> {
    let (Some(player), Some(cards)) = (rest.first().and_then(|p| Seat::parse(p)), rest.get(1))
    else {
        issues.push(malformed_action(token));
        return None;
    };
    Some(ActionEvent::DealHole {
        player,
        cards: card_pair(cards, issues),
    })
}

fn card_pair(cards: &str, issues: &mut Vec<HandError>) -> [Option<Card>; 2] {
    let pair = parse_card_pair(cards);
    let (first, rest) = split_card_pair(cards);
    let unreadable = pair
        .iter()
        .zip([first, rest])
        .any(|(card, half)| card.is_none() && !is_masked(half));
    if unreadable {
        issues.push(HandError::MalformedCardToken {
            token: cards.to_string(),
        });
    }
    pair
}

/// Splits a board operand such as `Jc8d2s` into two-character card tokens.
fn card_run(run: &str, issues: &mut Vec<HandError>) -> Vec<Option<Card>> {
    let chars: Vec<char> = run.chars().collect();
    chars
        .chunks(2)
        .map(|chunk| {
            let token: String = chunk.iter().collect();
            let card = parse_card(&token);
            if card.is_none() && !is_masked(&token) {
                issues.push(HandError::MalformedCardToken { token });
            }
            card
        })
        .collect()
}

// `?` hides a card the history never revealed; that is not a corrupt token.
fn is_masked(cards: &str) -> bool {
    !cards.is_empty() && cards.chars().all(|c| c == '?')
}

fn malformed_action(token: &str) -> HandError {
    HandError::MalformedActionToken {
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_without_amount_is_reported_and_skipped() {
        let out = ActionInterpreter::default().interpret(&["p2 cbr"]);
        assert!(out.events.is_empty());
        assert_eq!(
            out.issues,
            vec![HandError::MalformedActionToken {
                token: "p2 cbr".into()
            }]
        );
    }

    #[test]
    fn masked_hole_cards_are_not_reported() {
        let out = ActionInterpreter::default().interpret(&["d dh p3 ????"]);
        assert_eq!(
            out.events,
            vec![ActionEvent::DealHole {
                player: Seat(2),
                cards: [None, None]
            }]
        );
        assert!(out.issues.is_empty());
    }

    #[test]
    fn seat_labels_round_trip_through_display() {
        assert_eq!(Seat::parse("p6"), Some(Seat(5)));
        assert_eq!(Seat(5).to_string(), "p6");
        assert_eq!(Seat::parse("p0"), None);
        assert_eq!(Seat::parse("Alice"), None);
    }
}
