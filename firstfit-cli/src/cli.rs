//! Command-line interface (CLI)
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "firstfit",
    version,
    about = "First-fit memory allocator over a simulated address space"
)]
pub struct Cli {
    /// Path to a configuration YAML file (defaults to config/firstfit.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initialise the arena with this capacity before reading commands
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Read commands from a file instead of standard input
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Suppress the banner and prompt
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Scripts and `--quiet` sessions print only command output.
    pub fn interactive(&self) -> bool {
        self.script.is_none() && !self.quiet
    }
}
