use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Stand-in engine host that loads and reports the TR1 game-flow configuration",
    version
)]
pub struct Args {
    /// Directory holding the engine's assets (audio tracks are resolved against it)
    #[arg(long, default_value = "data")]
    pub data_root: PathBuf,

    /// Optional JSON array of item identifiers known to the engine
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print the published configuration as JSON instead of the summary
    #[arg(long)]
    pub json: bool,

    /// List every sequence entry in the summary
    #[arg(long)]
    pub verbose: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
