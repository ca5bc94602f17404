pub mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tldwatch")]
#[command(about = "Report newly registered IANA top-level domains", long_about = None)]
pub struct Cli {
    /// Enable debug logging (DEBUG=true in the environment does the same)
    #[arg(long)]
    pub debug: bool,
}
