//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// folio - a service catalog page for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a config file (overrides discovered configs)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a TOML catalog file replacing the built-in services
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print the resolved catalog as JSON and exit
    #[arg(long)]
    pub dump_catalog: bool,

    /// Skip the splash overlay
    #[arg(long)]
    pub no_splash: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["folio", "-vv", "--no-splash", "--catalog", "c.toml"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_splash);
        assert_eq!(cli.catalog.as_deref().unwrap().to_str(), Some("c.toml"));
        assert!(!cli.dump_catalog);
    }
}
