//! Lock mode schedule commands.

use anyhow::Result;
use chrono::NaiveTime;
use clap::Subcommand;
use gabb::{DeviceId, LockModeSchedule, ScheduleId, WeekDays};

use super::{parse_time, parse_week_days};
use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum LockModeAction {
    /// List lock mode schedules
    #[command(alias = "ls")]
    List,

    /// Create a schedule
    Create {
        /// Schedule name
        name: String,
        /// Daily start (HH:MM)
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// Daily end (HH:MM)
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        /// Active days, Monday first: `1111100` or `mon,tue,wed`
        #[arg(long, value_parser = parse_week_days, default_value = "1111100")]
        days: WeekDays,
        /// Device the schedule applies to (repeatable)
        #[arg(short, long = "device", required = true)]
        devices: Vec<DeviceId>,
        /// Create the schedule disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Update a schedule
    Update {
        /// Schedule ID
        id: ScheduleId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
        #[arg(long, value_parser = parse_week_days)]
        days: Option<WeekDays>,
        /// Replace the devices (repeatable)
        #[arg(short, long = "device")]
        devices: Vec<DeviceId>,
        #[arg(long)]
        enabled: Option<bool>,
    },

    /// Delete a schedule
    #[command(alias = "rm")]
    Delete {
        /// Schedule ID
        id: ScheduleId,
    },
}

pub async fn handle(action: LockModeAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let lock_modes = client.lock_modes();

    match action {
        LockModeAction::List => print_value(&lock_modes.list().await?, format),
        LockModeAction::Create {
            name,
            start,
            end,
            days,
            devices,
            disabled,
        } => {
            let schedule = LockModeSchedule {
                week_days: days,
                name,
                devices,
                start,
                end,
                enabled: !disabled,
            };
            print_outcome(&lock_modes.create(&schedule).await?, format, "Schedule created");
        }
        LockModeAction::Update {
            id,
            name,
            start,
            end,
            days,
            devices,
            enabled,
        } => {
            let mut update = lock_modes.update(id);
            if let Some(name) = name {
                update = update.name(name);
            }
            if let Some(start) = start {
                update = update.start(start);
            }
            if let Some(end) = end {
                update = update.end(end);
            }
            if let Some(days) = days {
                update = update.week_days(days);
            }
            if !devices.is_empty() {
                update = update.devices(devices);
            }
            if let Some(enabled) = enabled {
                update = update.enabled(enabled);
            }
            print_outcome(&update.send().await?, format, "Schedule updated");
        }
        LockModeAction::Delete { id } => {
            print_outcome(&lock_modes.delete(id).await?, format, "Schedule deleted");
        }
    }

    Ok(())
}
