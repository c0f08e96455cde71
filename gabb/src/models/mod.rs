//! Data models for Gabb entities and request payloads.

mod contact;
mod device;
mod ids;
mod lock_mode;
mod safezone;
pub mod time;

pub use contact::NewContact;
pub use device::{Gender, ProfileUpdate, SettingsUpdate};
pub use ids::{ContactId, DeviceId, PresetId, ScheduleId, TodoId, ZoneId};
pub use lock_mode::{LockModeSchedule, WeekDays};
pub(crate) use lock_mode::LockModePayload;
pub use safezone::Safezone;
