use std::env;
use std::io;

use anyhow::{Context, Result};
use political_donors::config::RunConfig;
use political_donors::run;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::from_args(env::args().skip(1));
    if config.used_defaults {
        warn!(
            input = %config.input.display(),
            zip_output = %config.zip_output.display(),
            date_output = %config.date_output.display(),
            "Not all three file paths given (1 input and 2 outputs), using default file paths instead"
        );
    }

    let summary = run(&config).with_context(|| {
        format!(
            "Failed to process contributions from '{}'",
            config.input.display()
        )
    })?;

    info!(
        records = summary.records_read,
        rejected = summary.rejected,
        zip_rows = summary.zip_rows,
        date_rows = summary.date_rows,
        "Finished processing contributions"
    );

    Ok(())
}
