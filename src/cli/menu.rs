//! Interactive menu loop
//!
//! [`run`] is the main loop of the game: it shows the menu, executes the
//! chosen action against the [`GameSession`] and always comes back to the
//! menu, whatever went wrong, until the player quits or input ends.

use std::io::{BufRead, Write};

use log::warn;

use super::output::{farewell_banner, title_banner};
use crate::{
    Result,
    adapters::{Console, console::parse_yes_no},
    error::Error,
    knowledge::RoundOutcome,
    session::{GameSession, LoadOutcome, SaveOutcome},
};

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    NewGame,
    Load,
    Save,
    Quit,
}

impl MenuChoice {
    /// Parse a reply by its first letter, case-insensitively.
    pub fn parse(reply: &str) -> Option<Self> {
        match reply.trim_start().chars().next()?.to_ascii_uppercase() {
            'P' => Some(MenuChoice::Play),
            'N' => Some(MenuChoice::NewGame),
            'L' => Some(MenuChoice::Load),
            'S' => Some(MenuChoice::Save),
            'Q' => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    fn label(self, played_round: bool) -> &'static str {
        match self {
            MenuChoice::Play if played_round => "[P] Play again",
            MenuChoice::Play => "[P] Play",
            MenuChoice::NewGame => "[N] Start a new game",
            MenuChoice::Load => "[L] Load previously saved game",
            MenuChoice::Save => "[S] Save game",
            MenuChoice::Quit => "[Q] Quit game",
        }
    }
}

/// Menu entries currently on offer: "play" once there is something to guess
/// from, "save" only with unsaved changes.
pub fn available_choices(session: &GameSession) -> Vec<MenuChoice> {
    let mut choices = Vec::with_capacity(5);
    if !session.is_empty() || session.played_round() {
        choices.push(MenuChoice::Play);
    }
    choices.push(MenuChoice::NewGame);
    choices.push(MenuChoice::Load);
    if session.is_dirty() {
        choices.push(MenuChoice::Save);
    }
    choices.push(MenuChoice::Quit);
    choices
}

/// Run the game until the player quits or the input ends.
///
/// # Errors
///
/// Only failures to talk to the player at all (writing output, reading
/// input for reasons other than end of stream). Save and load problems are
/// reported to the player and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say(&title_banner())?;
    console.say("")?;

    loop {
        let choice = match ask_choice(session, console) {
            Ok(choice) => choice,
            Err(Error::InputClosed) => break,
            Err(e) => return Err(e),
        };

        let result = match choice {
            MenuChoice::Play => play(session, console),
            MenuChoice::NewGame => {
                session.new_game();
                play(session, console)
            }
            MenuChoice::Load => load(session, console),
            MenuChoice::Save => save(session, console),
            MenuChoice::Quit => break,
        };
        match result {
            Ok(()) => {}
            Err(Error::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }

    offer_save_before_quit(session, console)?;
    console.say(&farewell_banner())
}

fn ask_choice<R: BufRead, W: Write>(
    session: &GameSession,
    console: &mut Console<R, W>,
) -> Result<MenuChoice> {
    let choices = available_choices(session);
    console.say("What would you like to do?")?;
    for choice in &choices {
        console.say(&format!("   {}", choice.label(session.played_round())))?;
    }

    loop {
        let reply = console.read_reply("")?;
        match MenuChoice::parse(&reply) {
            Some(choice) if choices.contains(&choice) => return Ok(choice),
            _ => console.say("Please choose one of the listed options.")?,
        }
    }
}

/// Play a round and tell the player how it went.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    let message = match session.play_round(console)? {
        RoundOutcome::Guessed { animal } => format!("I guessed it! It was a {animal}."),
        RoundOutcome::LearnedRoot { animal } | RoundOutcome::Learned { animal, .. } => {
            format!("Thanks! I'll remember the {animal}.")
        }
    };
    console.say(&message)
}

/// Load the saved game, reporting problems instead of failing.
pub fn load<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    match session.request_load() {
        Ok(LoadOutcome::Loaded { animals, .. }) => {
            console.say(&format!("Loaded a saved game that knows {animals} animal(s)."))
        }
        Ok(LoadOutcome::NotFound { .. }) => console.say("Oops. No saved game found."),
        Err(e) => console.say(&format!("Could not load the saved game: {e}")),
    }
}

/// Save the game, reporting problems instead of failing.
pub fn save<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    match session.request_save() {
        Ok(SaveOutcome::Saved { path }) => console.say(&format!("Game saved to {}.", path.display())),
        Ok(SaveOutcome::Unchanged) => console.say("Nothing new to save."),
        Err(e) => console.say(&format!("Could not save the game: {e}")),
    }
}

fn offer_save_before_quit<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    if !session.is_dirty() {
        return Ok(());
    }

    console.say("You have unsaved changes. Save before quitting? (y/n)")?;
    let wants_save = loop {
        match console.read_reply("") {
            Ok(reply) => match parse_yes_no(&reply) {
                Some(answer) => break answer,
                None => console.say("Please answer y or n.")?,
            },
            Err(Error::InputClosed) => {
                warn!("input closed with unsaved changes; quitting without saving");
                break false;
            }
            Err(e) => return Err(e),
        }
    };

    if wants_save {
        save(session, console)?;
    }
    Ok(())
}
