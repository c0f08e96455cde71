//! Event log commands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum EventAction {
    /// List events
    #[command(alias = "ls")]
    List,

    /// Count events
    Count,

    /// Delete all events
    Clear,
}

pub async fn handle(action: EventAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let events = client.event_logs();

    match action {
        EventAction::List => print_value(&events.list().await?, format),
        EventAction::Count => print_value(&events.count().await?, format),
        EventAction::Clear => print_outcome(&events.clear().await?, format, "Event log cleared"),
    }

    Ok(())
}
