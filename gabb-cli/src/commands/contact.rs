//! Contact commands.

use anyhow::Result;
use clap::Subcommand;
use gabb::{ContactId, DeviceId, NewContact};

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum ContactAction {
    /// List contacts
    #[command(alias = "ls")]
    List,

    /// Add a contact
    Add {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Phone number in international format (+15555555555)
        #[arg(long)]
        phone: String,
        /// Relationship with the device owner
        #[arg(long)]
        relationship: String,
        /// Device to apply the contact to (repeatable)
        #[arg(short, long = "device", required = true)]
        devices: Vec<DeviceId>,
        /// Make this an emergency contact
        #[arg(long)]
        emergency: bool,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Contact ID
        id: ContactId,
    },

    /// Show emergency contacts
    Emergency,

    /// Set the emergency contact of a device
    SetEmergency {
        /// Device ID
        device: DeviceId,
        /// Contact ID
        contact: ContactId,
    },
}

pub async fn handle(action: ContactAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let contacts = client.contacts();

    match action {
        ContactAction::List => print_value(&contacts.list().await?, format),
        ContactAction::Add {
            first_name,
            last_name,
            phone,
            relationship,
            devices,
            emergency,
        } => {
            let mut contact = NewContact::new(first_name, last_name, phone, relationship).emergency(emergency);
            contact.devices = devices;
            print_outcome(&contacts.add(&contact).await?, format, "Contact added");
        }
        ContactAction::Delete { id } => {
            print_outcome(&contacts.delete(id).await?, format, "Contact deleted");
        }
        ContactAction::Emergency => print_value(&contacts.emergency().await?, format),
        ContactAction::SetEmergency { device, contact } => {
            print_outcome(
                &contacts.set_emergency(device, contact).await?,
                format,
                "Emergency contact set",
            );
        }
    }

    Ok(())
}
