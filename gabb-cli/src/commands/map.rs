//! Map commands.

use anyhow::Result;
use clap::Subcommand;
use gabb::DeviceId;

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum MapAction {
    /// Show device locations
    Show,

    /// Ask a device to report its location now
    Refresh {
        /// Device ID
        device: DeviceId,
    },
}

pub async fn handle(action: MapAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;

    match action {
        MapAction::Show => print_value(&client.map().get().await?, format),
        MapAction::Refresh { device } => {
            print_outcome(&client.map().refresh(device).await?, format, "Location refresh requested");
        }
    }

    Ok(())
}
