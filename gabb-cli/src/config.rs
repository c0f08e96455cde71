//! Configuration management for the Gabb CLI.

use anyhow::{Context, Result};
use clap::Args;
use gabb::GabbClient;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account credentials.
    pub auth: Option<AuthConfig>,
    /// API overrides.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// API endpoint configuration. Unset values use the library defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.myfilip.com/`.
    pub base_url: Option<String>,
    /// App build string sent on login.
    pub app_build: Option<String>,
}

/// Credentials given on the command line or through the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct AccountArgs {
    /// Account username [overrides the config file]
    #[arg(long, global = true, env = "GABB_USERNAME")]
    pub username: Option<String>,

    /// Account password [overrides the config file]
    #[arg(long, global = true, env = "GABB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join("gabb.toml"))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Save configuration to file.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&path, content).context("Failed to write config file")?;

    Ok(())
}

/// Pick credentials from arguments first, then the config file.
fn resolve_credentials(account: &AccountArgs, config: &Config) -> Result<AuthConfig> {
    let stored = config.auth.as_ref();

    let username = account
        .username
        .clone()
        .or_else(|| stored.map(|a| a.username.clone()))
        .context("No username configured. Run 'gabb auth login' or set GABB_USERNAME.")?;
    let password = account
        .password
        .clone()
        .or_else(|| stored.map(|a| a.password.clone()))
        .context("No password configured. Run 'gabb auth login' or set GABB_PASSWORD.")?;

    Ok(AuthConfig { username, password })
}

/// Log in and build a client from arguments and the config file.
pub async fn build_client(account: &AccountArgs) -> Result<GabbClient> {
    let config = load_config()?;
    let auth = resolve_credentials(account, &config)?;

    connect(&auth, &config.api).await
}

/// Log in with explicit credentials.
pub async fn connect(auth: &AuthConfig, api: &ApiConfig) -> Result<GabbClient> {
    let mut builder = GabbClient::builder().credentials(&auth.username, &auth.password);

    if let Some(url) = &api.base_url {
        builder = builder.base_url(url);
    }
    if let Some(build) = &api.app_build {
        builder = builder.app_build(build);
    }

    builder.connect().await.context("Failed to log in to Gabb")
}
