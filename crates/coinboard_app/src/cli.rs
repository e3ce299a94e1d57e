use std::path::PathBuf;

use clap::Parser;

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "coinboard")]
#[command(about = "Live cryptocurrency listing with persistent favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RON configuration file; missing file means built-in defaults.
    #[arg(long, default_value = "coinboard.ron")]
    pub config: PathBuf,

    /// Listing endpoint returning `{ "data": [...] }`.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory holding the favorites store.
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    #[arg(long)]
    pub log_level: Option<String>,

    /// Fetch, print both tables once and exit.
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_flags() {
        let cli = Cli::try_parse_from(["coinboard"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("coinboard.ron"));
        assert!(cli.endpoint.is_none());
        assert!(!cli.once);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "coinboard",
            "--endpoint",
            "http://localhost:9000/assets",
            "--storage-dir",
            "/tmp/cb",
            "--log",
            "both",
            "--log-level",
            "debug",
            "--once",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/assets"));
        assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/cb")));
        assert_eq!(cli.log, Some(LogDestination::Both));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.once);
    }
}
