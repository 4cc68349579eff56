//! Navigator preferences and their persistence.
//!
//! This module provides settings management with XDG Base Directory
//! compliance.

pub mod settings;

pub use settings::{
    DEFAULT_LOG_FILTER, NavigatorSettings, SettingsError, SettingsManager, get_config_path,
};
