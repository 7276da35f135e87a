//! CLI entrypoint for portfolio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use portfolio_application::{AppConfig, ChatWidgetController, ContactFormController};
use portfolio_domain::{ContactField, Showcase};
use portfolio_infrastructure::{ConfigLoader, HttpRelayClient, factory};
use portfolio_presentation::{
    AppState, ChatRepl, Cli, Command, ConsoleFormatter, ContactPrompt, server,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, &config)?;

    match cli.subcommand() {
        Command::Serve {
            bind,
            workers,
            environment,
            backend,
        } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if workers.is_some() {
                config.server.workers = workers;
            }
            if let Some(environment) = environment {
                config.environment = environment.into();
            }
            if let Some(backend) = backend {
                config.chat.backend = backend.into();
            }
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Chat { server, quiet } => {
            let client = Arc::new(HttpRelayClient::new(&server)?);
            let controller =
                ChatWidgetController::new(client).with_greeting(config.chat.greeting.clone());

            let mut repl = ChatRepl::new(controller, server).with_progress(!quiet);
            repl.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Contact {
            server,
            name,
            email,
            subject,
            message,
        } => {
            let client = Arc::new(HttpRelayClient::new(&server)?);
            let mut prompt = ContactPrompt::new(ContactFormController::new(client))
                .with_field(ContactField::Name, name)
                .with_field(ContactField::Email, email)
                .with_field(ContactField::Subject, subject)
                .with_field(ContactField::Message, message);

            match prompt.run().await? {
                Some(notification) => {
                    println!("{}", ConsoleFormatter::format_notification(&notification));
                    if notification.is_error() {
                        return Ok(ExitCode::FAILURE);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::from(130)),
            }
        }
        Command::Showcase { json } => {
            let showcase = Showcase::default();
            if json {
                println!("{}", serde_json::to_string_pretty(&showcase)?);
            } else {
                print!("{}", ConsoleFormatter::format_showcase(&showcase));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { check } => {
            let issues = config.validate();
            if !check {
                ConfigLoader::print_config_sources(cli.config.as_deref());
                println!();
                print!("{}", ConsoleFormatter::format_config(&config));
            }
            if issues.is_empty() {
                if check {
                    println!("Configuration OK");
                }
            } else {
                println!();
                println!("{}", ConsoleFormatter::format_config_issues(&issues));
                if issues.iter().any(|i| i.is_error()) {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            tracing::error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration; run `portfolio config` for details");
    }

    info!(
        environment = config.environment.as_str(),
        chat_url = config.chat_base_url(),
        "Starting portfolio server"
    );

    // === Dependency Injection ===
    let chat_backend = factory::chat_backend(&config)?;
    let mail_transport = factory::mail_transport(&config)?;
    let state = AppState::new(&config, chat_backend, mail_transport);

    server::run(state, &config.server).await?;
    Ok(())
}

/// Initialize logging based on verbosity level, plus a daily log file when
/// `logging.directory` is set.
fn init_logging(verbose: u8, config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match config.logging.directory() {
        Some(dir) => {
            let appender = file_appender(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Daily-rolling `portfolio.log` in `dir`, created if missing
fn file_appender(dir: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("portfolio.log")
        .build(dir)
        .map_err(|e| anyhow!("Cannot open log directory '{}': {}", dir, e))
}
