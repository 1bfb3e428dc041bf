//! Heuristic hand-strength scoring used to annotate snapshots.
//!
//! Pre-flop scores come from an ordered rule table: rules are tried top to
//! bottom and the first one whose predicate holds decides the score. Later rules
//! overlap earlier ones, so the order is part of the table's meaning.
//!
//! Post-flop scoring is a deliberate approximation that only looks at how many
//! board cards are out (`0.3 + 0.4 * n / 5`). It is not a hand evaluator.

use crate::cards::Card;

/// The features of two hole cards the pre-flop table keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleShape {
    pub high: u8,
    pub low: u8,
    pub pair: bool,
    pub suited: bool,
}

impl HoleShape {
    pub fn new(hole: [Card; 2]) -> Self {
        let (a, b) = (hole[0].rank.value(), hole[1].rank.value());
        Self {
            high: a.max(b),
            low: a.min(b),
            pair: hole[0].rank == hole[1].rank,
            suited: hole[0].suit == hole[1].suit,
        }
    }

    /// Ranks strictly between the two cards; -1 for a pair.
    pub fn gap(&self) -> i16 {
        i16::from(self.high) - i16::from(self.low) - 1
    }
}

struct PreflopRule {
    name: &'static str,
    applies: fn(&HoleShape) -> bool,
    score: fn(&HoleShape) -> f64,
}

static PREFLOP_RULES: [PreflopRule; 10] = [
    PreflopRule {
        name: "premium_pair",
        applies: |h| h.pair && h.high >= 10,
        score: |h| 0.85 + f64::from(h.high - 10) / 40.0,
    },
    PreflopRule {
        name: "medium_pair",
        applies: |h| h.pair && h.high >= 7,
        score: |_| 0.7,
    },
    PreflopRule {
        name: "small_pair",
        applies: |h| h.pair,
        score: |_| 0.6,
    },
    PreflopRule {
        name: "suited_high",
        applies: |h| h.suited && h.high >= 12,
        score: |_| 0.75,
    },
    PreflopRule {
        name: "suited_medium_connector",
        applies: |h| h.suited && h.high >= 10 && h.gap() <= 2,
        score: |_| 0.65,
    },
    PreflopRule {
        name: "two_broadway",
        applies: |h| h.high >= 13 && h.low >= 10,
        score: |_| 0.7,
    },
    PreflopRule {
        name: "broadway_with_ten",
        applies: |h| h.high >= 12 && h.low >= 10,
        score: |_| 0.6,
    },
    PreflopRule {
        name: "connected_high",
        applies: |h| h.gap() <= 1 && h.low >= 9,
        score: |_| 0.6,
    },
    PreflopRule {
        name: "mid_range",
        applies: |h| (h.suited && h.gap() <= 2) || (h.gap() <= 1 && h.low >= 7),
        score: |_| 0.5,
    },
    PreflopRule {
        name: "high_card",
        applies: |_| true,
        score: |h| 0.3 + f64::from(h.high) / 40.0,
    },
];

fn first_rule(shape: &HoleShape) -> &'static PreflopRule {
    // the last rule always applies
    PREFLOP_RULES
        .iter()
        .find(|rule| (rule.applies)(shape))
        .unwrap_or(&PREFLOP_RULES[PREFLOP_RULES.len() - 1])
}

/// Name of the pre-flop rule that decides the score for `hole`.
pub fn preflop_rule(hole: [Card; 2]) -> &'static str {
    first_rule(&HoleShape::new(hole)).name
}

pub fn preflop_score(hole: [Card; 2]) -> f64 {
    let shape = HoleShape::new(hole);
    (first_rule(&shape).score)(&shape)
}

/// Board-count approximation; counts beyond five are treated as five.
pub fn postflop_score(board_cards: usize) -> f64 {
    0.3 + 0.4 * (board_cards.min(5) as f64 / 5.0)
}

/// Scores two hole cards against a board in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use phhforge_engine::cards::parse_card;
/// use phhforge_engine::equity::score;
///
/// let aces = [parse_card("Ah").unwrap(), parse_card("As").unwrap()];
/// assert!(score(aces, &[]) >= 0.85);
///
/// let board: Vec<_> = ["2c", "7d", "9h", "Js", "Kd"].iter().map(|c| parse_card(c)).collect();
/// assert_eq!(score(aces, &board), 0.7);
/// ```
pub fn score(hole: [Card; 2], board: &[Option<Card>]) -> f64 {
    if board.is_empty() {
        preflop_score(hole)
    } else {
        postflop_score(board.len())
    }
}

/// Like [`score`], but yields `None` when either hole card is a null card.
pub fn score_hole(hole: [Option<Card>; 2], board: &[Option<Card>]) -> Option<f64> {
    match hole {
        [Some(a), Some(b)] => Some(score([a, b], board)),
        _ => None,
    }
}
