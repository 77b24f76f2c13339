//! The game's knowledge: a binary tree of yes/no questions over animals

pub mod node;
pub mod serialization;
pub mod tree;

pub use node::{Branch, Node};
pub use serialization::{InvalidTree, SavedNode, SavedTree};
pub use tree::{DecisionTree, RoundOutcome};
