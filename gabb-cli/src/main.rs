//! Gabb smartwatch CLI.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{contact, device, event, lock_mode, map, preset, safezone, todo, user};
use config::AccountArgs;
use tracing_subscriber::EnvFilter;

/// Gabb smartwatch parent API client
#[derive(Parser)]
#[command(name = "gabb")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    account: AccountArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Contact operations
    #[command(alias = "c")]
    Contact {
        #[command(subcommand)]
        action: contact::ContactAction,
    },

    /// Device profile, settings and goals
    #[command(alias = "d")]
    Device {
        #[command(subcommand)]
        action: device::DeviceAction,
    },

    /// Device locations
    Map {
        #[command(subcommand)]
        action: map::MapAction,
    },

    /// Event log operations
    #[command(alias = "e")]
    Events {
        #[command(subcommand)]
        action: event::EventAction,
    },

    /// Parent account operations
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        action: user::UserAction,
    },

    /// Lock mode schedules
    #[command(alias = "lm")]
    LockMode {
        #[command(subcommand)]
        action: lock_mode::LockModeAction,
    },

    /// Todo operations
    Todo {
        #[command(subcommand)]
        action: todo::TodoAction,
    },

    /// Text preset operations
    #[command(alias = "p")]
    Preset {
        #[command(subcommand)]
        action: preset::PresetAction,
    },

    /// Safezone operations
    #[command(alias = "z")]
    Safezone {
        #[command(subcommand)]
        action: safezone::SafezoneAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in with --username and --password and store the credentials
    Login,
    /// Forget stored credentials
    Logout,
    /// Show current auth status
    Status {
        /// Log in to check the stored credentials
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let (account, format) = (&cli.account, cli.format);

    match cli.command {
        Commands::Auth { action } => handle_auth(action, account).await,
        Commands::Contact { action } => contact::handle(action, account, format).await,
        Commands::Device { action } => device::handle(action, account, format).await,
        Commands::Map { action } => map::handle(action, account, format).await,
        Commands::Events { action } => event::handle(action, account, format).await,
        Commands::User { action } => user::handle(action, account, format).await,
        Commands::LockMode { action } => lock_mode::handle(action, account, format).await,
        Commands::Todo { action } => todo::handle(action, account, format).await,
        Commands::Preset { action } => preset::handle(action, account, format).await,
        Commands::Safezone { action } => safezone::handle(action, account, format).await,
        Commands::Config => {
            let cfg = config::load_config()?;
            println!("Config file: {}", config::config_path()?.display());
            println!("Authenticated: {}", cfg.auth.is_some());
            if let Some(auth) = &cfg.auth {
                println!("Username: {}", auth.username);
            }
            if let Some(url) = &cfg.api.base_url {
                println!("Base URL: {url}");
            }
            if let Some(build) = &cfg.api.app_build {
                println!("App build: {build}");
            }
            Ok(())
        }
    }
}

async fn handle_auth(action: AuthAction, account: &AccountArgs) -> Result<()> {
    match action {
        AuthAction::Login => {
            let auth = config::AuthConfig {
                username: account
                    .username
                    .clone()
                    .context("--username is required")?,
                password: account
                    .password
                    .clone()
                    .context("--password is required")?,
            };

            let mut cfg = config::load_config()?;
            let client = config::connect(&auth, &cfg.api).await?;
            tracing::debug!(
                "token valid until {}",
                client.session().authenticator().expires_at().await
            );

            cfg.auth = Some(auth);
            config::save_config(&cfg)?;
            println!("{} {}", "Logged in as".green(), client.username());
            Ok(())
        }
        AuthAction::Logout => {
            let mut cfg = config::load_config()?;
            cfg.auth = None;
            config::save_config(&cfg)?;
            println!("Logged out");
            Ok(())
        }
        AuthAction::Status { check } => {
            let cfg = config::load_config()?;
            let Some(auth) = &cfg.auth else {
                println!("Not logged in");
                return Ok(());
            };

            println!("Logged in as {}", auth.username);
            if check {
                let client = config::connect(auth, &cfg.api).await?;
                let expires = client.session().authenticator().expires_at().await;
                println!("Token valid until {}", expires.to_rfc3339());
            }
            Ok(())
        }
    }
}
