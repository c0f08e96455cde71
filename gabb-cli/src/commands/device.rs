//! Device commands.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Subcommand, ValueEnum};
use gabb::{DeviceId, Gender};

use super::{parse_date, parse_time};
use crate::config::{build_client, AccountArgs};
use crate::output::{print_outcome, print_value, OutputFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Show the device profile
    Profile {
        /// Device ID
        device: DeviceId,
    },

    /// Update the device profile
    SetProfile {
        /// Device ID
        device: DeviceId,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        birth_date: Option<NaiveDate>,
    },

    /// Show device settings
    Settings {
        /// Device ID
        device: DeviceId,
    },

    /// Update device settings
    SetSettings {
        /// Device ID
        device: DeviceId,
        /// Enable or disable tracking
        #[arg(long)]
        tracking: Option<bool>,
        /// Daily tracking start (HH:MM), requires --end
        #[arg(long, value_parser = parse_time, requires = "end")]
        start: Option<NaiveTime>,
        /// Daily tracking end (HH:MM), requires --start
        #[arg(long, value_parser = parse_time, requires = "start")]
        end: Option<NaiveTime>,
        /// Tracking interval in seconds
        #[arg(long)]
        interval: Option<u32>,
        /// Enable or disable active tracking
        #[arg(long)]
        active_tracking: Option<bool>,
        /// Active tracking duration in seconds
        #[arg(long)]
        active_duration: Option<u32>,
        /// Active tracking interval in seconds
        #[arg(long)]
        active_frequency: Option<u32>,
        /// Enable or disable battery saving mode
        #[arg(long)]
        battery_saver: Option<bool>,
        /// Enable or disable silent mode
        #[arg(long)]
        silent: Option<bool>,
    },

    /// Show device goals
    Goals {
        /// Device ID
        device: DeviceId,
    },

    /// Set the daily step goal
    StepGoal {
        /// Device ID
        device: DeviceId,
        /// Steps per day
        steps: u32,
    },
}

pub async fn handle(action: DeviceAction, account: &AccountArgs, format: OutputFormat) -> Result<()> {
    let client = build_client(account).await?;
    let devices = client.devices();

    match action {
        DeviceAction::Profile { device } => print_value(&devices.profile(device).await?, format),
        DeviceAction::SetProfile {
            device,
            first_name,
            last_name,
            gender,
            birth_date,
        } => {
            let mut update = devices.update_profile(device);
            if let Some(name) = first_name {
                update = update.first_name(name);
            }
            if let Some(name) = last_name {
                update = update.last_name(name);
            }
            if let Some(gender) = gender {
                update = update.gender(gender.into());
            }
            if let Some(date) = birth_date {
                update = update.birth_date(date.and_time(NaiveTime::MIN));
            }
            print_outcome(&update.send().await?, format, "Profile updated");
        }
        DeviceAction::Settings { device } => print_value(&devices.settings(device).await?, format),
        DeviceAction::SetSettings {
            device,
            tracking,
            start,
            end,
            interval,
            active_tracking,
            active_duration,
            active_frequency,
            battery_saver,
            silent,
        } => {
            let mut update = devices.update_settings(device);
            if let Some(enabled) = tracking {
                update = update.tracking(enabled);
            }
            if let (Some(start), Some(end)) = (start, end) {
                update = update.tracking_window(start, end);
            }
            if let Some(seconds) = interval {
                update = update.tracking_interval(seconds);
            }
            if let Some(enabled) = active_tracking {
                update = update.active_tracking(enabled);
            }
            if let Some(seconds) = active_duration {
                update = update.active_tracking_duration(seconds);
            }
            if let Some(seconds) = active_frequency {
                update = update.active_tracking_frequency(seconds);
            }
            if let Some(enabled) = battery_saver {
                update = update.battery_power_saving(enabled);
            }
            if let Some(enabled) = silent {
                update = update.silent_mode(enabled);
            }
            print_outcome(&update.send().await?, format, "Settings updated");
        }
        DeviceAction::Goals { device } => print_value(&devices.goals(device).await?, format),
        DeviceAction::StepGoal { device, steps } => {
            print_outcome(&devices.set_step_goal(device, steps).await?, format, "Step goal set");
        }
    }

    Ok(())
}
