use std::process::ExitCode;

use clap::Parser;
use rmdialog::{Cli, DialogueConfig, core::logging, core::profiling};

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&cli.log_level);
    if cli.profile {
        profiling::init_profiling(profiling::DEFAULT_PROFILER_ADDR);
    }

    let config = match DialogueConfig::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match rmdialog::run(config) {
        Ok(dismissal) => {
            tracing::info!("Dialogue closed: {:?}", dismissal);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
