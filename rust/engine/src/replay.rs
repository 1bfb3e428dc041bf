use serde::{Deserialize, Serialize};

use crate::actions::{ActionEvent, Decision, Seat};
use crate::cards::Card;
use crate::equity;
use crate::errors::HandError;
use crate::record::HandRecord;

/// Represents a betting street in Texas Hold'em poker.
/// Derived from how many board cards have been dealt so far.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn from_board_len(len: usize) -> Street {
        match len {
            0 => Street::Preflop,
            1..=3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Records a single player decision during a hand.
/// Associates the decision with the seat and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted
    pub player: Seat,
    /// The betting street when this action occurred
    pub street: Street,
    /// The decision taken
    #[serde(flatten)]
    pub decision: Decision,
}

/// The table as one player saw it immediately before one of their decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Hand number from the record (0 when absent)
    pub hand_id: u64,
    pub players: Vec<String>,
    pub blinds: Vec<u64>,
    pub starting_stacks: Vec<u64>,
    /// Seat of the acting player
    pub position: Seat,
    pub hole_cards: [Option<Card>; 2],
    /// Board cards revealed so far
    pub board_cards: Vec<Option<Card>>,
    /// Running pot: blinds plus every raise-to amount so far
    pub pot_size: u64,
    /// Most recent raise-to amount, or the largest blind before any raise
    pub current_bet: u64,
    /// Every fold/check-call/raise before this decision, all players
    pub actions_history: Vec<ActionRecord>,
    /// Heuristic strength of the hole cards against the board
    pub equity: Option<f64>,
}

impl GameSnapshot {
    pub fn street(&self) -> Street {
        Street::from_board_len(self.board_cards.len())
    }
}

/// A snapshot together with the decision it precedes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPoint {
    pub snapshot: GameSnapshot,
    pub action_taken: Decision,
    /// Index of the triggering event in the interpreted event list
    pub event_index: usize,
}

/// Decision points for one player, plus the soft conditions met while replaying.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replay {
    pub decisions: Vec<DecisionPoint>,
    pub issues: Vec<HandError>,
}

impl Replay {
    pub fn snapshots(&self) -> impl Iterator<Item = &GameSnapshot> {
        self.decisions.iter().map(|d| &d.snapshot)
    }
}

/// Running state carried across the event sequence.
#[derive(Debug, Clone)]
struct TableState {
    board: Vec<Option<Card>>,
    pot: u64,
    current_bet: u64,
    history: Vec<ActionRecord>,
}

impl TableState {
    fn seeded(blinds: &[u64]) -> Self {
        Self {
            board: Vec::with_capacity(5),
            pot: blinds.iter().sum(),
            current_bet: blinds.iter().copied().max().unwrap_or(0),
            history: Vec::new(),
        }
    }

    fn apply(&mut self, player: Seat, decision: Decision) {
        self.history.push(ActionRecord {
            player,
            street: Street::from_board_len(self.board.len()),
            decision,
        });
        // pot accounting is additive in raise-to amounts, not net chips moved
        if let Decision::Raise { amount } = decision {
            self.pot = self.pot.saturating_add(amount);
            self.current_bet = amount;
        }
    }
}

/// One [`HandError::UnknownPlayer`] per decision event whose seat is not at
/// a `table_size`-player table.
///
/// [`GameStateReplayer`] skips such events silently, so callers replaying a
/// hand for several players report them once per record with this.
pub fn unseated_actions(events: &[ActionEvent], table_size: usize) -> Vec<HandError> {
    events
        .iter()
        .filter_map(ActionEvent::decision)
        .filter(|(player, _)| player.index() >= table_size)
        .map(|(player, _)| {
            tracing::warn!(%player, table_size, "action by unseated player ignored");
            HandError::UnknownPlayer {
                seat: player.index(),
                players: table_size,
            }
        })
        .collect()
}

/// Replays an interpreted hand and emits one [`DecisionPoint`] per decision of
/// a designated player.
///
/// The replay trusts the history: it does not check betting legality.
///
/// # Examples
///
/// ```
/// use phhforge_engine::actions::interpret_actions;
/// use phhforge_engine::record::HandRecord;
/// use phhforge_engine::replay::GameStateReplayer;
///
/// let record = HandRecord::parse(
///     "players = ['Alice', 'Bob']\nblinds_or_straddles = [1, 2]\n\
///      actions = ['d dh p1 AhAs', 'd dh p2 2h3h', 'p1 cbr 6', 'p2 f']",
/// ).unwrap();
/// let events = interpret_actions(&record.actions);
/// let replay = GameStateReplayer::new().replay_for_player(&record, &events, "Alice");
/// assert_eq!(replay.decisions.len(), 1);
/// assert_eq!(replay.decisions[0].snapshot.pot_size, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GameStateReplayer;

impl GameStateReplayer {
    pub fn new() -> Self {
        Self
    }

    /// Replays from the perspective of the player named `player` in `record.players`.
    /// A name that is not seated yields an empty replay.
    pub fn replay_for_player(
        &self,
        record: &HandRecord,
        events: &[ActionEvent],
        player: &str,
    ) -> Replay {
        match record.seat_of(player) {
            Some(index) => self.replay(record, events, Seat(index)),
            None => {
                tracing::debug!(player, hand = ?record.hand, "player not seated in hand");
                Replay::default()
            }
        }
    }

    pub fn replay(&self, record: &HandRecord, events: &[ActionEvent], seat: Seat) -> Replay {
        let mut out = Replay::default();
        let table_size = record.players.len();
        if seat.index() >= table_size {
            out.issues.push(HandError::UnknownPlayer {
                seat: seat.index(),
                players: table_size,
            });
            return out;
        }

        let Some(hole_cards) = events.iter().find_map(|event| match event {
            ActionEvent::DealHole { player, cards } if *player == seat => Some(*cards),
            _ => None,
        }) else {
            tracing::debug!(%seat, hand = ?record.hand, "no hole cards dealt");
            out.issues.push(HandError::IncompleteHand {
                player: seat.to_string(),
            });
            return out;
        };

        let mut state = TableState::seeded(&record.blinds_or_straddles);
        for (event_index, event) in events.iter().enumerate() {
            if let ActionEvent::DealBoard { cards } = event {
                state.board.extend_from_slice(cards);
                continue;
            }
            let Some((player, decision)) = event.decision() else {
                continue;
            };
            // reported once per record by `unseated_actions`
            if player.index() >= table_size {
                continue;
            }
            if player == seat {
                let snapshot = GameSnapshot {
                    hand_id: record.hand.unwrap_or(0),
                    players: record.players.clone(),
                    blinds: record.blinds_or_straddles.clone(),
                    starting_stacks: record.starting_stacks.clone(),
                    position: seat,
                    hole_cards,
                    board_cards: state.board.clone(),
                    pot_size: state.pot,
                    current_bet: state.current_bet,
                    actions_history: state.history.clone(),
                    equity: equity::score_hole(hole_cards, &state.board),
                };
                out.decisions.push(DecisionPoint {
                    snapshot,
                    action_taken: decision,
                    event_index,
                });
            }
            state.apply(player, decision);
        }

        if !out.decisions.is_empty() {
            tracing::debug!(
                hand = record.hand.unwrap_or(0),
                %seat,
                decisions = out.decisions.len(),
                "replayed decision points"
            );
        }
        out
    }
}
