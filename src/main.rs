use clap::Parser;
use hw05a::app::{handle_fatal_error, init_logging, AppConfig};
use hw05a::cli::Cli;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    init_logging(&config);

    if let Err(e) = run() {
        handle_fatal_error(e, config.verbose);
    }
}

fn run() -> anyhow::Result<()> {
    hw05a::sheet::emit()?;
    debug!("Sheet written");
    Ok(())
}
