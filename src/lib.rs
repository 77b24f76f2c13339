//! Guess the animal: a yes/no guessing game that learns as it goes
//!
//! This crate provides:
//! - A self-extending decision tree of yes/no questions over animals
//! - A game session that plays rounds and tracks unsaved changes
//! - MessagePack and JSON persistence with structural validation on load
//! - A terminal front end (menu loop, `show` and `export` commands)

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod knowledge;
pub mod ports;
pub mod session;

pub use error::{Error, Result};
pub use identifiers::{Animal, QuestionText};
pub use knowledge::{Branch, DecisionTree, Node, RoundOutcome};
pub use session::{GameSession, LoadOutcome, SaveOutcome, SessionState};
