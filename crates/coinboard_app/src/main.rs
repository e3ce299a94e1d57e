mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = config::AppConfig::load(&cli.config)?.with_overrides(&cli);
    platform::logging::initialize(
        config.log_destination,
        config.level_filter()?,
        &config.log_file,
    );
    platform::run_app(config, cli.once)
}
