//! Training-example assembly on top of replayed decision points.
//!
//! A [`TrainingExample`] pairs a snapshot with the decision that followed it,
//! the rest of the hand, and the player's stack outcome. Examples render to a
//! natural-language prompt/target pair ([`PromptRecord`]) or to the flat
//! [`RewardRecord`] consumed by reward functions.

use serde::{Deserialize, Serialize};

use crate::actions::{ActionEvent, Decision};
use crate::cards::{format_cards, Card};
use crate::record::HandRecord;
use crate::replay::{ActionRecord, DecisionPoint, GameSnapshot};

/// Opponent stack reported when a record carries no starting stacks.
pub const DEFAULT_OPPONENT_CHIPS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackResult {
    pub starting_stack: u64,
    /// 0 when the record has no finishing stacks
    pub finishing_stack: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub game_state: GameSnapshot,
    pub action_taken: Decision,
    /// Every event after the decision, dealer actions included
    pub subsequent_actions: Vec<ActionEvent>,
    pub result: StackResult,
}

impl TrainingExample {
    pub fn new(record: &HandRecord, events: &[ActionEvent], point: DecisionPoint) -> Self {
        let seat = point.snapshot.position.index();
        let result = StackResult {
            starting_stack: record.starting_stacks.get(seat).copied().unwrap_or(0),
            finishing_stack: record
                .finishing_stacks
                .as_ref()
                .and_then(|stacks| stacks.get(seat).copied())
                .unwrap_or(0),
        };
        let subsequent_actions = events
            .get(point.event_index + 1..)
            .map(<[ActionEvent]>::to_vec)
            .unwrap_or_default();
        Self {
            game_state: point.snapshot,
            action_taken: point.action_taken,
            subsequent_actions,
            result,
        }
    }

    /// Name of the acting player, if the seat is in the player list.
    pub fn player_name(&self) -> Option<&str> {
        self.game_state
            .players
            .get(self.game_state.position.index())
            .map(String::as_str)
    }
}

/// Prompt text, expected answer, and the example both were rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub prompt: String,
    pub target: String,
    pub example: TrainingExample,
}

impl From<TrainingExample> for PromptRecord {
    fn from(example: TrainingExample) -> Self {
        Self {
            prompt: render_prompt(&example),
            target: render_target(example.action_taken),
            example,
        }
    }
}

fn describe(record: &ActionRecord) -> String {
    match record.decision {
        Decision::Fold => format!("{} folds", record.player),
        Decision::CheckCall => format!("{} checks/calls", record.player),
        Decision::Raise { amount } => format!("{} raises to {}", record.player, amount),
    }
}

/// Renders the decision prompt for one example.
pub fn render_prompt(example: &TrainingExample) -> String {
    let state = &example.game_state;
    let board = match format_cards(&state.board_cards) {
        s if s.is_empty() => "No community cards yet".to_string(),
        s => s,
    };
    let pot_odds = if state.current_bet > 0 {
        format!(
            "Pot odds: {:.2}:1",
            state.pot_size as f64 / state.current_bet as f64
        )
    } else {
        String::new()
    };
    let history = if state.actions_history.is_empty() {
        "No previous actions".to_string()
    } else {
        state
            .actions_history
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut prompt = format!(
        "You are playing a No-Limit Texas Hold'em poker game.\n\
         Hand Information:\n\
         - Hand #: {}\n\
         - Your position: {}\n\
         - Your hole cards: {}\n\
         - Community cards: {}\n\
         - Current pot size: {}\n\
         - Current bet to call: {}\n\
         {}\n\
         Player stacks:\n",
        state.hand_id,
        state.position,
        format_cards(&state.hole_cards),
        board,
        state.pot_size,
        state.current_bet,
        pot_odds,
    );
    for (i, (player, stack)) in state.players.iter().zip(&state.starting_stacks).enumerate() {
        prompt.push_str(&format!("- {} ({}): {}\n", player, i + 1, stack));
    }
    prompt.push_str(&format!(
        "\nAction history:\n\
         {}\n\
         What is your next action? Choose from:\n\
         1. Fold\n\
         2. Call/Check\n\
         3. Raise to [amount]\n\
         Analyze the situation and explain your reasoning before making a decision.\n",
        history
    ));
    prompt
}

pub fn render_target(decision: Decision) -> String {
    match decision {
        Decision::Fold => "After analyzing the situation, I decide to fold.".to_string(),
        Decision::CheckCall => "After analyzing the situation, I decide to call.".to_string(),
        Decision::Raise { amount } => {
            format!("After analyzing the situation, I decide to raise to {}.", amount)
        }
    }
}

/// Flat per-decision record for reward computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub your_hand: [Option<Card>; 2],
    pub community_cards: Vec<Option<Card>>,
    pub equity: Option<f64>,
    pub pot_size: u64,
    pub amount_to_call: u64,
    /// Zero-based seat index
    pub your_position: usize,
    pub your_chips: u64,
    /// Largest starting stack among the other players
    pub opponent_chips: u64,
    pub action: Decision,
    pub action_previous_players: Vec<ActionRecord>,
    pub hand_id: u64,
    pub player_name: String,
    /// Raise-to amount, 0 for folds and calls
    pub bet_amount: u64,
}

impl From<&TrainingExample> for RewardRecord {
    fn from(example: &TrainingExample) -> Self {
        let state = &example.game_state;
        let seat = state.position.index();
        let opponent_chips = state
            .starting_stacks
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != seat)
            .map(|(_, &stack)| stack)
            .max()
            .unwrap_or(DEFAULT_OPPONENT_CHIPS);
        Self {
            your_hand: state.hole_cards,
            community_cards: state.board_cards.clone(),
            equity: state.equity,
            pot_size: state.pot_size,
            amount_to_call: state.current_bet,
            your_position: seat,
            your_chips: example.result.starting_stack,
            opponent_chips,
            action: example.action_taken,
            action_previous_players: state.actions_history.clone(),
            hand_id: state.hand_id,
            player_name: example.player_name().unwrap_or_default().to_string(),
            bet_amount: match example.action_taken {
                Decision::Raise { amount } => amount,
                _ => 0,
            },
        }
    }
}
