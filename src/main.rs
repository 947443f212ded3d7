use clap::Parser;
use tracing_subscriber::EnvFilter;

use dependency_check_step::{cli::Cli, config, config::StepConfig, runner};

// Exit codes the build maps to step outcomes.
const EXIT_CONFIG_ERROR: i32 = 7;
const EXIT_RUN_ERROR: i32 = 1;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose || config::debug_requested());

    let config = match StepConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    config.print();

    match runner::run(&config) {
        Ok(result) => {
            if config.debug {
                let summary = serde_json::to_string(&result).unwrap_or_default();
                tracing::debug!("run summary: {summary}");
            }

            std::process::exit(result.exit_code);
        }
        Err(report) => {
            eprintln!("{report:?}");
            std::process::exit(EXIT_RUN_ERROR);
        }
    }
}
