//! Settings adapters implementing the [`SettingsProvider`] port.
//!
//! - `PostgresSettings` - settings row plus custom question lists
//! - `StaticSettings` - fixed value for tests and single-flavor setups
//!
//! [`SettingsProvider`]: crate::ports::SettingsProvider

mod postgres_settings;
mod static_settings;

pub use postgres_settings::PostgresSettings;
pub use static_settings::StaticSettings;
