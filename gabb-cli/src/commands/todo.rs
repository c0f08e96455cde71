//! Todo commands.

use anyhow::Result;
use clap::Subcommand;
use gabb::{DeviceId, TodoId};

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum TodoAction {
    /// List todos
    #[command(alias = "ls")]
    List,

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Device ID
        device: DeviceId,
        /// Todo ID
        id: TodoId,
    },
}

pub async fn handle(action: TodoAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;

    match action {
        TodoAction::List => print_value(&client.todos().list().await?, format),
        TodoAction::Delete { device, id } => {
            print_outcome(&client.todos().delete(device, id).await?, format, "Todo deleted");
        }
    }

    Ok(())
}
