//! Play command - Run the interactive game

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::Console,
    app::App,
    cli::{config::StorageArgs, menu},
};

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Play the animal guessing game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Load the saved game before showing the menu
    #[arg(long)]
    pub load: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.storage.resolve()?;
    let app = App::new(config);
    let mut session = app.create_session();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    if args.load {
        menu::load(&mut session, &mut console).context("load saved game")?;
    }
    menu::run(&mut session, &mut console).context("run game")?;
    Ok(())
}
