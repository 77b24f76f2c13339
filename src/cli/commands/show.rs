//! Show command - Print what the game has learned

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::repository_for,
    cli::{
        config::StorageArgs,
        output::{print_section, print_stats_table},
    },
    ports::TreeRepository,
};

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Print the knowledge tree stored in the save file")]
pub struct ShowArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let config = args.storage.resolve()?;
    let tree = repository_for(config.format)
        .load(&config.save_file)
        .with_context(|| format!("load {}", config.save_file.display()))?;

    print_section(&format!("Knowledge in {}", config.save_file.display()));
    print!("{}", tree.render());

    let animals = tree.leaf_count().to_string();
    let questions = tree.question_count().to_string();
    let depth = tree.depth().to_string();
    println!();
    print_stats_table(&[
        ("Animals", &animals),
        ("Questions", &questions),
        ("Longest chain", &depth),
    ]);
    Ok(())
}
