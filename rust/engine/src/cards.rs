use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Decodes a hand-history suit letter (`c`, `d`, `h`, `s`), ignoring case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and heuristic scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Decodes a hand-history rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`), ignoring case.
    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Integer value, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Two cards are equal iff both rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Rank character followed by the suit symbol, e.g. `A♥`.
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.as_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

/// Decodes a two-character card token such as `Ah` or `Tc`.
///
/// Returns `None` (the null card) when the token is not exactly two characters
/// long or either character is not a recognised rank/suit. Hand histories mask
/// unknown cards as `??`, which therefore decode to `None` as well.
///
/// # Examples
///
/// ```
/// use phhforge_engine::cards::{parse_card, Rank, Suit};
///
/// let card = parse_card("Ah").unwrap();
/// assert_eq!(card.rank, Rank::Ace);
/// assert_eq!(card.rank.value(), 14);
/// assert_eq!(card.suit, Suit::Hearts);
///
/// assert!(parse_card("x").is_none());
/// ```
pub fn parse_card(token: &str) -> Option<Card> {
    let mut chars = token.chars();
    let (r, s) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(s), None) => (r, s),
        _ => return None,
    };
    Some(Card {
        rank: Rank::from_char(r)?,
        suit: Suit::from_char(s)?,
    })
}

/// Decodes a run of concatenated card tokens (`AhKs`) two characters at a time.
///
/// The first card always takes the first two characters and the second card the
/// remainder, so a short or overlong string yields null cards in the affected slots.
pub fn parse_card_pair(token: &str) -> [Option<Card>; 2] {
    let (first, rest) = split_card_pair(token);
    [parse_card(first), parse_card(rest)]
}

/// The first two characters of `token` and the remainder.
pub(crate) fn split_card_pair(token: &str) -> (&str, &str) {
    let split = token
        .char_indices()
        .nth(2)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token.split_at(split)
}

/// Joins cards for display, skipping null cards.
pub fn format_cards(cards: &[Option<Card>]) -> String {
    cards
        .iter()
        .flatten()
        .map(Card::pretty)
        .collect::<Vec<_>>()
        .join(" ")
}
