//! CLI entry point for vtrade-auth.

pub mod auth;
pub mod errors;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AuthConfig;

/// vtrade sign-in CLI
#[derive(Parser, Debug)]
#[command(name = "vtrade-auth", version, about = "Sign in to vtrade with Google")]
pub struct Cli {
    /// Backend base URL (overrides VTRADE_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the stored session (overrides VTRADE_HOME)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with Google and store the session
    Login,
    /// Restore the stored session and show who is signed in
    Status,
    /// Forget the stored session
    Logout,
}

impl Cli {
    /// Environment config with command-line overrides applied.
    pub fn config(&self) -> AuthConfig {
        let mut config = AuthConfig::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.clone());
        }
        if let Some(home) = &self.home {
            config = config.with_home_dir(home.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_login() {
        let cli = Cli::try_parse_from(["vtrade-auth", "login"]).unwrap();
        assert!(matches!(cli.command, Commands::Login));
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn parse_status_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vtrade-auth",
            "status",
            "--api-url",
            "http://localhost:9000",
            "--home",
            "/tmp/vt",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Status));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/vt")));
    }

    #[test]
    fn parse_logout() {
        let cli = Cli::try_parse_from(["vtrade-auth", "logout"]).unwrap();
        assert!(matches!(cli.command, Commands::Logout));
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["vtrade-auth"]).is_err());
    }

    #[test]
    fn parse_unknown_subcommand_is_error() {
        assert!(Cli::try_parse_from(["vtrade-auth", "refresh"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "vtrade-auth",
            "--api-url",
            "http://localhost:9000",
            "--home",
            "/tmp/vt",
            "status",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.api_base_url(), "http://localhost:9000");
        assert_eq!(config.home_dir(), &PathBuf::from("/tmp/vt"));
    }
}
