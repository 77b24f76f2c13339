//! Export command - Convert the save file to another format

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{SaveFormat, repository_for},
    cli::config::StorageArgs,
    ports::TreeRepository,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Write the saved knowledge tree in another format")]
pub struct ExportArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Target format
    #[arg(long, value_enum, default_value_t = SaveFormat::Json)]
    pub to: SaveFormat,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let config = args.storage.resolve()?;
    let tree = repository_for(config.format)
        .load(&config.save_file)
        .with_context(|| format!("load {}", config.save_file.display()))?;

    repository_for(args.to)
        .save(&tree, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;

    println!(
        "Exported {} animal(s) to {}",
        tree.leaf_count(),
        args.output.display()
    );
    Ok(())
}
