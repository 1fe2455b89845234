use anyhow::{Result, anyhow};
use csvmd::{Command, Config};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing()?;

    match &config.command {
        Command::Convert(args) => csvmd::run_convert(args)?,
        Command::Preview(args) => csvmd::run_preview(args)?,
    };

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}
