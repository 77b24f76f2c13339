//! Subcommands of the `guess-animal` binary

pub mod export;
pub mod play;
pub mod show;
