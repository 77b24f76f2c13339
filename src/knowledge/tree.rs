//! The self-extending decision tree
//!
//! Traversal and learning happen in one pass: [`DecisionTree::guess_round`]
//! walks from the root asking the oracle each question, guesses the animal at
//! the leaf it reaches, and on a wrong guess rewrites that leaf into a new
//! question. All answers are collected before anything is modified, so a
//! round that fails part-way leaves the tree exactly as it was.

use std::fmt::Write as _;

use log::debug;

use super::node::{Branch, Node};
use crate::{
    Result,
    identifiers::{Animal, QuestionText},
    ports::Oracle,
};

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The tree guessed the player's animal.
    Guessed { animal: Animal },
    /// The tree was empty; the player's animal became the root leaf.
    LearnedRoot { animal: Animal },
    /// A wrong guess was turned into a new question.
    Learned {
        animal: Animal,
        replaced: Animal,
        question: QuestionText,
    },
}

impl RoundOutcome {
    /// Whether the round changed the tree.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            RoundOutcome::LearnedRoot { .. } | RoundOutcome::Learned { .. }
        )
    }

    /// The newly learned animal, if any.
    pub fn learned_animal(&self) -> Option<&Animal> {
        match self {
            RoundOutcome::LearnedRoot { animal } | RoundOutcome::Learned { animal, .. } => {
                Some(animal)
            }
            RoundOutcome::Guessed { .. } => None,
        }
    }
}

/// The program's accumulated knowledge.
///
/// `root` is `None` until the first animal is learned. Learning only ever
/// replaces one leaf with a question over two fresh leaves, so the tree stays
/// finite and acyclic by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTree {
    root: Option<Node>,
}

impl DecisionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wrap an existing root. Used by the persistence layer once a decoded
    /// tree has been validated.
    pub fn from_root(root: Option<Node>) -> Self {
        Self { root }
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Run one full guess-and-learn cycle against `oracle`.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures (e.g. closed input). The tree is left
    /// unchanged when that happens.
    pub fn guess_round<O: Oracle + ?Sized>(&mut self, oracle: &mut O) -> Result<RoundOutcome> {
        let root = match &mut self.root {
            Some(root) => root,
            None => {
                let animal = ask_animal(oracle)?;
                debug!("empty tree, learned first animal {animal}");
                self.root = Some(Node::leaf(animal.clone()));
                return Ok(RoundOutcome::LearnedRoot { animal });
            }
        };

        let mut path = Vec::new();
        let mut node: &Node = root;
        let guess = loop {
            match node {
                Node::Question { text, yes, no } => {
                    let branch = Branch::from_answer(oracle.ask_yes_no(&format!("{text} (y/n)"))?);
                    path.push(branch);
                    node = match branch {
                        Branch::Yes => yes.as_ref(),
                        Branch::No => no.as_ref(),
                    };
                }
                Node::Leaf { animal } => break animal.clone(),
            }
        };
        debug!("reached {guess} after {} question(s)", path.len());

        if oracle.ask_yes_no(&format!("Is it a {guess}? (y/n)"))? {
            return Ok(RoundOutcome::Guessed { animal: guess });
        }

        let animal = ask_animal(oracle)?;
        let question = QuestionText::new(oracle.ask_free_text(&format!(
            "What y/n question would you ask to tell the difference between a {guess} and a {animal}?"
        ))?)?;
        let branch = Branch::from_answer(
            oracle.ask_yes_no(&format!("And what would your answer be for a {animal}? (y/n)"))?,
        );

        root.descend_mut(&path).split(question.clone(), animal.clone(), branch);
        debug!("learned {animal} ({branch:?} to '{question}'), displacing {guess}");

        Ok(RoundOutcome::Learned {
            animal,
            replaced: guess,
            question,
        })
    }

    /// All known animals, yes-branches first.
    pub fn animals(&self) -> Vec<&Animal> {
        let mut animals = Vec::new();
        let mut stack: Vec<&Node> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { animal } => animals.push(animal),
                Node::Question { yes, no, .. } => {
                    stack.push(no);
                    stack.push(yes);
                }
            }
        }
        animals
    }

    pub fn leaf_count(&self) -> usize {
        self.animals().len()
    }

    pub fn question_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            if let Node::Question { yes, no, .. } = node {
                count += 1;
                stack.push(yes);
                stack.push(no);
            }
        }
        count
    }

    /// Number of questions on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|root| (root, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Question { yes, no, .. } => {
                    stack.push((yes.as_ref(), depth + 1));
                    stack.push((no.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    /// Indented outline of the tree.
    ///
    /// ```text
    /// Does it bark?
    ///   yes: dog
    ///   no:  cat
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let Some(root) = &self.root else {
            out.push_str("(no animals known yet)\n");
            return out;
        };

        let mut stack = vec![(root, 0usize, "")];
        while let Some((node, indent, label)) = stack.pop() {
            let pad = "  ".repeat(indent);
            match node {
                Node::Leaf { animal } => {
                    let _ = writeln!(out, "{pad}{label}{animal}");
                }
                Node::Question { text, yes, no } => {
                    let _ = writeln!(out, "{pad}{label}{text}");
                    stack.push((no.as_ref(), indent + 1, "no:  "));
                    stack.push((yes.as_ref(), indent + 1, "yes: "));
                }
            }
        }
        out
    }
}

fn ask_animal<O: Oracle + ?Sized>(oracle: &mut O) -> Result<Animal> {
    Animal::new(oracle.ask_free_text("You win. I give up. What animal were you thinking of?")?)
}
