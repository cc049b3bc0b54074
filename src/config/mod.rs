//! Configuration module for snapwin
//!
//! User preferences are read fresh on every resize and passed into the
//! resizer explicitly rather than read from global state.

pub mod preferences;

pub use preferences::{
    FilePreferences, PreferenceStore, Preferences, PreferencesError, StaticPreferences,
};
