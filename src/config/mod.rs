//! Front-end configuration: settings file and filesystem locations.

pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_path};
pub use settings::{OutputFormat, Settings};
