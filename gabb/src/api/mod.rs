//! API modules.

mod contact;
mod device;
mod event_log;
mod lock_mode;
mod map;
mod safezone;
mod text_preset;
mod todo;
mod user;

pub use contact::ContactApi;
pub use device::{DeviceApi, ProfileUpdateBuilder, SettingsUpdateBuilder};
pub use event_log::EventLogApi;
pub use lock_mode::{LockModeApi, LockModeUpdateBuilder};
pub use map::MapApi;
pub use safezone::SafezoneApi;
pub use text_preset::TextPresetApi;
pub use todo::TodoApi;
pub use user::UserApi;
