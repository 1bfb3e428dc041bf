//! # phhforge-engine: Hand-History Replay Core
//!
//! Turns poker hand-history records written in the line-oriented `key=value`
//! format into per-decision game snapshots for training data. The crate is pure:
//! no I/O, no shared state, and every record is processed independently.
//!
//! ## Core Modules
//!
//! - [`record`] - Record parser (`key=value` lines to typed fields) and [`record::HandRecord`]
//! - [`actions`] - Action-token interpreter producing [`actions::ActionEvent`]s
//! - [`replay`] - Game-state replay emitting [`replay::GameSnapshot`]s per decision
//! - [`equity`] - Heuristic hand-strength scoring
//! - [`training`] - Training examples, prompt rendering and reward records
//! - [`pipeline`] - One-call record-to-examples processing
//! - [`cards`] - Card representation and card-token decoding
//! - [`errors`] - Error and condition taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use phhforge_engine::pipeline::{Perspective, Pipeline};
//!
//! let text = "hand = 1\n\
//!             players = ['Alice', 'Bob']\n\
//!             blinds_or_straddles = [1, 2]\n\
//!             starting_stacks = [200, 200]\n\
//!             actions = ['d dh p1 AhAs', 'd dh p2 2h3h', 'p1 cbr 6', 'p2 f']";
//!
//! let output = Pipeline::default()
//!     .process(text, &Perspective::Player("Alice".into()))
//!     .unwrap();
//! assert_eq!(output.examples.len(), 1);
//! assert_eq!(output.examples[0].game_state.pot_size, 3);
//! ```

pub mod actions;
pub mod cards;
pub mod equity;
pub mod errors;
pub mod pipeline;
pub mod record;
pub mod replay;
pub mod training;
