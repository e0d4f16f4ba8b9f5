use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "charcmp", version, about = "Single-character comparator CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Order two characters after case and accent folding
    Compare { first: char, second: char },
    /// Check that two characters are comparable without ordering them
    Validate { first: char, second: char },
}
