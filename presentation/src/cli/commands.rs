//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use portfolio_application::ChatBackendKind;
use portfolio_domain::Environment;
use std::path::PathBuf;

/// Default address of a locally running relay server
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Deployment environment override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    Development,
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Development => Environment::Development,
            EnvironmentArg::Production => Environment::Production,
        }
    }
}

/// Chat backend override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Forward to the configured chat service
    Remote,
    /// Answer locally from the built-in keyword table
    Canned,
}

impl From<BackendArg> for ChatBackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Remote => ChatBackendKind::Remote,
            BackendArg::Canned => ChatBackendKind::Canned,
        }
    }
}

/// CLI arguments for portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author, version, about = "Portfolio site relay server and terminal clients")]
#[command(long_about = r#"
Runs the portfolio relay server (chat proxy, contact mailer, showcase data)
and provides terminal clients for it.

Configuration files are loaded from (in priority order):
1. PORTFOLIO_* environment variables (EMAIL_USER / EMAIL_PASS for mail)
2. --config <path>     Explicit config file
3. ./portfolio.toml    Project-level config
4. ~/.config/portfolio/config.toml   Global config

Example:
  portfolio serve --environment production
  portfolio chat --server http://127.0.0.1:3000
  portfolio contact --name Ada --email ada@example.com --message "Hello"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

impl Cli {
    /// The subcommand to run; `serve` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP relay server
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Number of worker threads (overrides server.workers)
        #[arg(long, value_name = "N")]
        workers: Option<usize>,

        /// Deployment environment (overrides environment)
        #[arg(short, long, value_enum)]
        environment: Option<EnvironmentArg>,

        /// Chat backend (overrides chat.backend)
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Interactive chat against a running server
    Chat {
        /// Base URL of the relay server
        #[arg(long, value_name = "URL", default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// Suppress the waiting spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Send a contact message through a running server
    Contact {
        /// Base URL of the relay server
        #[arg(long, value_name = "URL", default_value = DEFAULT_SERVER_URL)]
        server: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },

    /// Print the profile, projects and skills
    Showcase {
        /// Print as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show configuration sources and the effective configuration
    Config {
        /// Only run validation and report issues
        #[arg(long)]
        check: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            bind: None,
            workers: None,
            environment: None,
            backend: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::parse_from(["portfolio"]);
        assert!(matches!(cli.subcommand(), Command::Serve { bind: None, .. }));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "portfolio",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--environment",
            "production",
            "--backend",
            "canned",
        ]);
        match cli.subcommand() {
            Command::Serve {
                bind,
                environment,
                backend,
                ..
            } => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0:8080"));
                assert_eq!(environment.map(Environment::from), Some(Environment::Production));
                assert_eq!(backend.map(ChatBackendKind::from), Some(ChatBackendKind::Canned));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["portfolio", "chat", "-vv", "--no-config"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        match cli.subcommand() {
            Command::Chat { server, quiet } => {
                assert_eq!(server, DEFAULT_SERVER_URL);
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
