// Configuration loading

pub mod error;
pub mod profile;
pub mod settings;

pub use error::ConfigError;
pub use profile::MappingProfile;
pub use settings::{Settings, WatcherSettings};
