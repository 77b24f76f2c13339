//! Oracle port - the player on the other side of the game
//!
//! The decision tree never talks to a terminal directly. Every question it
//! needs answered goes through an [`Oracle`], which lets the same traversal
//! run against stdin/stdout, a scripted test double, or anything else.

use crate::Result;

/// Source of the player's answers.
///
/// Implementations are responsible for input validation: `ask_free_text`
/// only returns non-empty text and `ask_yes_no` only returns once the player
/// has given something that starts with `y` or `n`. Invalid input is
/// re-prompted inside the oracle and never reaches the caller.
///
/// # Errors
///
/// Both methods fail only when no answer can be obtained at all, e.g. the
/// input stream was closed ([`crate::Error::InputClosed`]).
///
/// # Examples
///
/// ```
/// use guess_animal::{Result, ports::Oracle};
///
/// /// A player who always thinks of a cat and answers "no" to everything.
/// struct CatLover;
///
/// impl Oracle for CatLover {
///     fn ask_free_text(&mut self, _prompt: &str) -> Result<String> {
///         Ok("cat".to_string())
///     }
///
///     fn ask_yes_no(&mut self, _prompt: &str) -> Result<bool> {
///         Ok(false)
///     }
/// }
/// ```
pub trait Oracle {
    /// Ask an open question; the reply is never empty.
    fn ask_free_text(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool>;
}
