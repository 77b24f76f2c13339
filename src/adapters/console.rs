//! Terminal oracle
//!
//! [`Console`] talks to the player over any `BufRead`/`Write` pair (stdin and
//! stdout in the binary, byte buffers in tests). It owns input validation:
//! blank lines are ignored and yes/no questions are repeated until the reply
//! starts with `y` or `n`.

use std::io::{BufRead, Write};

use crate::{Result, error::Error, ports::Oracle};

const INPUT_PROMPT: &str = "> ";

/// Line-oriented player interaction.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text to the player.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(write_error)
    }

    /// Print `prompt` (if non-empty) and read the first non-blank reply,
    /// trimmed.
    ///
    /// # Errors
    ///
    /// [`Error::InputClosed`] once the input stream is exhausted.
    pub fn read_reply(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            self.say(prompt)?;
        }
        loop {
            write!(self.output, "{INPUT_PROMPT}")
                .and_then(|()| self.output.flush())
                .map_err(write_error)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
                operation: "read player input".to_string(),
                source,
            })?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            let reply = line.trim();
            if !reply.is_empty() {
                return Ok(reply.to_string());
            }
        }
    }

    /// Consume the console and hand back its output, mostly for tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Interpret a reply as yes/no by its first letter.
pub fn parse_yes_no(reply: &str) -> Option<bool> {
    match reply.trim_start().chars().next()?.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

fn write_error(source: std::io::Error) -> Error {
    Error::Io {
        operation: "write to player".to_string(),
        source,
    }
}

impl<R: BufRead, W: Write> Oracle for Console<R, W> {
    fn ask_free_text(&mut self, prompt: &str) -> Result<String> {
        self.read_reply(prompt)
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let mut reply = self.read_reply(prompt)?;
        loop {
            if let Some(answer) = parse_yes_no(&reply) {
                return Ok(answer);
            }
            self.say("Please answer y or n.")?;
            reply = self.read_reply("")?;
        }
    }
}
