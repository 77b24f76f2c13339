//! Scripted oracle for testing.
//!
//! Replays a fixed queue of answers and records every prompt it was shown,
//! so tests can drive whole rounds without a terminal.

use std::collections::VecDeque;

use crate::{Result, error::Error, ports::Oracle};

/// One queued reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Text(String),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Oracle that answers from a script.
///
/// # Examples
///
/// ```
/// use guess_animal::adapters::{Answer, ScriptedOracle};
/// use guess_animal::knowledge::DecisionTree;
///
/// let mut tree = DecisionTree::new();
/// let mut oracle = ScriptedOracle::new([Answer::text("cat")]);
///
/// let outcome = tree.guess_round(&mut oracle)?;
/// assert!(outcome.mutated());
/// assert!(oracle.is_finished());
/// # Ok::<(), guess_animal::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
}

impl ScriptedOracle {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt asked so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether every queued answer has been used.
    pub fn is_finished(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| Error::ScriptExhausted {
            prompt: prompt.to_string(),
        })
    }
}

impl Oracle for ScriptedOracle {
    fn ask_free_text(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            Answer::Yes | Answer::No => Err(Error::ScriptMismatch {
                expected: "free text",
                prompt: prompt.to_string(),
            }),
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Text(_) => Err(Error::ScriptMismatch {
                expected: "yes/no",
                prompt: prompt.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_and_records_prompts() {
        let mut oracle = ScriptedOracle::new([Answer::Yes, Answer::text("owl")]);

        assert!(oracle.ask_yes_no("first?").unwrap());
        assert_eq!(oracle.ask_free_text("second?").unwrap(), "owl");
        assert_eq!(oracle.prompts(), ["first?", "second?"]);
        assert!(oracle.is_finished());
    }

    #[test]
    fn test_exhausted_and_mismatched_scripts_fail() {
        let mut oracle = ScriptedOracle::new([Answer::text("owl")]);
        assert!(matches!(
            oracle.ask_yes_no("yes or no?"),
            Err(Error::ScriptMismatch { .. })
        ));
        assert!(matches!(
            oracle.ask_free_text("anything?"),
            Err(Error::ScriptExhausted { .. })
        ));
    }
}
