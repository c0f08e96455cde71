//! Text preset commands.

use anyhow::Result;
use clap::Subcommand;
use gabb::{DeviceId, PresetId};

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum PresetAction {
    /// List the text presets of a device
    #[command(alias = "ls")]
    List {
        /// Device ID
        device: DeviceId,
    },

    /// Add a text preset
    Add {
        /// Device ID
        device: DeviceId,
        /// Message text
        message: String,
    },

    /// Change a text preset
    Update {
        /// Device ID
        device: DeviceId,
        /// Preset ID
        id: PresetId,
        /// New message text
        message: String,
    },

    /// Delete a text preset
    #[command(alias = "rm")]
    Delete {
        /// Device ID
        device: DeviceId,
        /// Preset ID
        id: PresetId,
    },
}

pub async fn handle(action: PresetAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let presets = client.text_presets();

    match action {
        PresetAction::List { device } => print_value(&presets.list(device).await?, format),
        PresetAction::Add { device, message } => {
            print_outcome(&presets.add(device, &message).await?, format, "Preset added");
        }
        PresetAction::Update { device, id, message } => {
            print_outcome(&presets.update(device, id, &message).await?, format, "Preset updated");
        }
        PresetAction::Delete { device, id } => {
            print_outcome(&presets.delete(device, id).await?, format, "Preset deleted");
        }
    }

    Ok(())
}
