//! Record text in, training examples out.
//!
//! Each call handles exactly one record and shares nothing with other calls, so
//! callers may fan records out across threads freely.

use crate::actions::{ActionInterpreter, Dialect};
use crate::errors::HandError;
use crate::record::HandRecord;
use crate::replay::{unseated_actions, GameSnapshot, GameStateReplayer};
use crate::training::TrainingExample;

/// Whose decisions to extract from a hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Perspective {
    /// Every seated player, in seat order
    #[default]
    AllPlayers,
    /// One player, by name
    Player(String),
}

impl Perspective {
    fn players<'a>(&'a self, record: &'a HandRecord) -> Vec<&'a str> {
        match self {
            Perspective::AllPlayers => record.players.iter().map(String::as_str).collect(),
            Perspective::Player(name) => vec![name.as_str()],
        }
    }
}

/// Examples extracted from one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandOutput {
    pub hand: Option<u64>,
    pub examples: Vec<TrainingExample>,
    /// Soft conditions from interpretation and replay
    pub issues: Vec<HandError>,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    interpreter: ActionInterpreter,
    replayer: GameStateReplayer,
}

impl Pipeline {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            interpreter: ActionInterpreter::new(dialect),
            replayer: GameStateReplayer::new(),
        }
    }

    /// Parses, interprets and replays one record.
    ///
    /// # Errors
    ///
    /// Only record-level failures are returned; soft conditions land in
    /// [`HandOutput::issues`].
    pub fn process(&self, text: &str, perspective: &Perspective) -> Result<HandOutput, HandError> {
        let record = HandRecord::parse(text)?;
        Ok(self.process_record(&record, perspective))
    }

    pub fn process_record(&self, record: &HandRecord, perspective: &Perspective) -> HandOutput {
        let interpretation = self.interpreter.interpret(&record.actions);
        let mut out = HandOutput {
            hand: record.hand,
            issues: interpretation.issues,
            ..HandOutput::default()
        };
        out.issues
            .extend(unseated_actions(&interpretation.events, record.players.len()));
        for player in perspective.players(record) {
            let replay = self
                .replayer
                .replay_for_player(record, &interpretation.events, player);
            out.issues.extend(replay.issues);
            out.examples.extend(
                replay
                    .decisions
                    .into_iter()
                    .map(|point| TrainingExample::new(record, &interpretation.events, point)),
            );
        }
        if !out.examples.is_empty() {
            tracing::debug!(
                hand = record.hand.unwrap_or(0),
                examples = out.examples.len(),
                "generated training examples"
            );
        }
        out
    }

    /// Snapshots for one named player.
    pub fn snapshots(&self, text: &str, player: &str) -> Result<Vec<GameSnapshot>, HandError> {
        let record = HandRecord::parse(text)?;
        let events = self.interpreter.interpret(&record.actions).events;
        Ok(self
            .replayer
            .replay_for_player(&record, &events, player)
            .decisions
            .into_iter()
            .map(|point| point.snapshot)
            .collect())
    }
}
