//! Rust client library for the Gabb smartwatch parent API.
//!
//! ```no_run
//! # async fn run() -> gabb::Result<()> {
//! let client = gabb::GabbClient::builder()
//!     .credentials("parent@example.com", "password")
//!     .connect()
//!     .await?;
//!
//! let devices = client.map().get().await?;
//! println!("{devices:#}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use client::{
    ApiRequest, AuthEndpoints, Authenticator, BaseUrl, BaseUrls, Credentials, GabbClient,
    GabbClientBuilder, HttpConfig, Session, TokenState,
};
pub use error::{Error, Result};

// Re-export commonly used models
pub use models::{
    ContactId, DeviceId, Gender, LockModeSchedule, NewContact, PresetId, ProfileUpdate, Safezone,
    ScheduleId, SettingsUpdate, TodoId, WeekDays, ZoneId,
};

// Re-export API types
pub use api::{
    ContactApi, DeviceApi, EventLogApi, LockModeApi, LockModeUpdateBuilder, MapApi,
    ProfileUpdateBuilder, SafezoneApi, SettingsUpdateBuilder, TextPresetApi, TodoApi, UserApi,
};
