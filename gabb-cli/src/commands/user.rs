//! User commands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::{build_client, AccountArgs};
use crate::output::{print_value, OutputFormat};

#[derive(Subcommand)]
pub enum UserAction {
    /// Show the parent profile
    Profile,
}

pub async fn handle(action: UserAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;

    match action {
        UserAction::Profile => print_value(&client.user().profile().await?, format),
    }

    Ok(())
}
