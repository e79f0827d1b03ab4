use anyhow::Result;
use clap::Parser;
use std::io;

use interest_calculator::{init_logging, run_session, CliConfig, SessionOutcome};

fn main() -> Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    tracing::debug!("configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();

    // Any failure ends the run quietly; nothing here should crash the process
    match run_session(stdin.lock(), stdout.lock(), config.session_options()) {
        Ok(SessionOutcome::Completed(_)) => tracing::info!("run completed"),
        Ok(SessionOutcome::Aborted(err)) => tracing::info!(kind = err.kind(), "run ended early"),
        Err(e) => {
            tracing::error!(error = %e, "unexpected failure");
            eprintln!("发生错误: {}", e);
        }
    }

    Ok(())
}
