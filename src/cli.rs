//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::records::RecordId;

#[derive(Debug, Parser)]
#[command(name = "recordview")]
#[command(about = "Browse records with prefetch-on-intent and loading boundaries")]
pub struct Cli {
    /// Config file (default: ~/.config/recordview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL; skips the embedded fixture server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Record to open on startup
    #[arg(long, value_name = "ID")]
    pub open: Option<String>,

    /// Cache freshness window in seconds
    #[arg(long, value_name = "N")]
    pub ttl_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run only the fixture server until Ctrl+C
    Serve {
        /// Bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(ttl) = self.ttl_secs {
            config.cache.ttl_seconds = ttl;
        }
        if let Some(Command::Serve { bind: Some(bind) }) = &self.command {
            config.fixtures.bind_addr = bind.clone();
        }
    }

    pub fn initial_record(&self) -> Option<RecordId> {
        self.open.as_deref().map(RecordId::from)
    }

    pub fn is_serve(&self) -> bool {
        matches!(self.command, Some(Command::Serve { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_runs_tui_with_defaults() {
        let cli = Cli::try_parse_from(["recordview"]).unwrap();
        assert!(!cli.is_serve());
        assert!(cli.initial_record().is_none());

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "recordview",
            "--base-url",
            "http://127.0.0.1:9000",
            "--ttl-secs",
            "5",
            "--open",
            "3",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.client.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.cache.ttl_seconds, 5);
        assert_eq!(cli.initial_record(), Some(RecordId::from("3")));
    }

    #[test]
    fn serve_subcommand_overrides_bind() {
        let cli = Cli::try_parse_from(["recordview", "serve", "--bind", "0.0.0.0:4000"]).unwrap();
        assert!(cli.is_serve());

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.fixtures.bind_addr, "0.0.0.0:4000");
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["recordview", "serve", "--config", "/tmp/x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }
}
