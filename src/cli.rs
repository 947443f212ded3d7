//! CLI parsing for the step binary

use clap::Parser;

#[derive(Parser)]
#[command(name = "dependency-check-step")]
#[command(about = "Runs OWASP dependency-check and exports its reports for later steps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level regardless of the `debug` step input
    #[arg(long, short)]
    pub verbose: bool,
}
