//! Safezone commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use gabb::{DeviceId, Safezone, ZoneId};

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

/// Zone definition shared by `add` and `update`.
#[derive(Args)]
pub struct ZoneArgs {
    /// Zone name
    #[arg(long)]
    name: String,
    #[arg(long, allow_negative_numbers = true)]
    latitude: f64,
    #[arg(long, allow_negative_numbers = true)]
    longitude: f64,
    /// Radius around the point
    #[arg(long, default_value_t = 150.0)]
    radius: f64,
    /// Device the zone applies to (repeatable)
    #[arg(short, long = "device", required = true)]
    devices: Vec<DeviceId>,
    /// Create the zone disabled
    #[arg(long)]
    disabled: bool,
}

impl From<ZoneArgs> for Safezone {
    fn from(args: ZoneArgs) -> Self {
        Safezone {
            longitude: args.longitude,
            latitude: args.latitude,
            name: args.name,
            radius: args.radius,
            enabled: !args.disabled,
            devices: args.devices,
        }
    }
}

#[derive(Subcommand)]
pub enum SafezoneAction {
    /// List safezones
    #[command(alias = "ls")]
    List,

    /// Add a safezone
    Add(ZoneArgs),

    /// Replace a safezone
    Update {
        /// Zone ID
        id: String,
        #[command(flatten)]
        zone: ZoneArgs,
    },

    /// Delete a safezone
    #[command(alias = "rm")]
    Delete {
        /// Zone ID
        id: String,
    },
}

pub async fn handle(action: SafezoneAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let zones = client.safezones();

    match action {
        SafezoneAction::List => print_value(&zones.list().await?, format),
        SafezoneAction::Add(args) => {
            let zone = Safezone::from(args);
            print_outcome(&zones.add(&zone).await?, format, "Safezone added");
        }
        SafezoneAction::Update { id, zone } => {
            let zone = Safezone::from(zone);
            print_outcome(&zones.update(ZoneId::new(id), &zone).await?, format, "Safezone updated");
        }
        SafezoneAction::Delete { id } => {
            print_outcome(&zones.delete(ZoneId::new(id)).await?, format, "Safezone deleted");
        }
    }

    Ok(())
}
