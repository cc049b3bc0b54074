use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing preferences consumed by the resizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Gap between tiled windows and between a window and the screen edge
    pub window_padding: f64,
}

impl Preferences {
    pub const DEFAULT_PADDING: f64 = 0.0;

    /// Parses preferences from TOML text and validates them
    pub fn from_toml(text: &str) -> Result<Self, PreferencesError> {
        let prefs: Preferences = toml::from_str(text)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Loads preferences from `path`, returning defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(PreferencesError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), PreferencesError> {
        Self::validate_padding(self.window_padding).map(|_| ())
    }

    /// Rejects negative and non-finite gaps
    pub fn validate_padding(padding: f64) -> Result<f64, PreferencesError> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(PreferencesError::InvalidPadding(padding));
        }
        Ok(padding)
    }

    /// Default location: `<config dir>/snapwin/preferences.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snapwin").join("preferences.toml"))
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            window_padding: Self::DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Window padding must be a finite, non-negative number (got {0})")]
    InvalidPadding(f64),
}

/// Source of preference values, consulted on every resize
pub trait PreferenceStore {
    fn window_padding(&self) -> f64;
}

/// Fixed preference values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPreferences {
    window_padding: f64,
}

impl StaticPreferences {
    pub fn new(window_padding: f64) -> Result<Self, PreferencesError> {
        Ok(Self {
            window_padding: Preferences::validate_padding(window_padding)?,
        })
    }
}

impl Default for StaticPreferences {
    fn default() -> Self {
        Self {
            window_padding: Preferences::DEFAULT_PADDING,
        }
    }
}

impl PreferenceStore for StaticPreferences {
    fn window_padding(&self) -> f64 {
        self.window_padding
    }
}

/// Preferences backed by a TOML file that is re-read on every access
///
/// Edits to the file take effect on the next resize. A missing file means
/// defaults; an unreadable or invalid file logs a warning and also falls
/// back to defaults, so a typo never blocks tiling.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn current(&self) -> Preferences {
        Preferences::load(&self.path).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), "{err}; using default preferences");
            Preferences::default()
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn window_padding(&self) -> f64 {
        self.current().window_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_padding() {
        let prefs = Preferences::from_toml("window_padding = 12.5").unwrap();
        assert_eq!(prefs.window_padding, 12.5);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let prefs = Preferences::from_toml("").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn negative_padding_is_rejected() {
        let result = Preferences::from_toml("window_padding = -4.0");
        assert!(matches!(result, Err(PreferencesError::InvalidPadding(p)) if p == -4.0));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Preferences::from_toml("window_padding = \"wide\"");
        assert!(matches!(result, Err(PreferencesError::Parse(_))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn file_store_rereads_on_every_access() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let store = FilePreferences::new(&path);

        std::fs::write(&path, "window_padding = 6.0").unwrap();
        assert_eq!(store.window_padding(), 6.0);

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "window_padding = 20.0").unwrap();
        drop(file);
        assert_eq!(store.window_padding(), 20.0);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "window_padding = [").unwrap();

        let store = FilePreferences::new(&path);
        assert_eq!(store.window_padding(), Preferences::DEFAULT_PADDING);
    }

    #[test]
    fn static_store_returns_value() {
        assert_eq!(StaticPreferences::new(10.0).unwrap().window_padding(), 10.0);
        assert_eq!(
            StaticPreferences::default().window_padding(),
            Preferences::DEFAULT_PADDING
        );
    }

    #[test]
    fn static_store_rejects_invalid_padding() {
        assert!(matches!(
            StaticPreferences::new(-10.0),
            Err(PreferencesError::InvalidPadding(p)) if p == -10.0
        ));
        assert!(matches!(
            StaticPreferences::new(f64::NAN),
            Err(PreferencesError::InvalidPadding(p)) if p.is_nan()
        ));
        assert!(matches!(
            StaticPreferences::new(f64::INFINITY),
            Err(PreferencesError::InvalidPadding(_))
        ));
    }

    #[test]
    fn nan_padding_in_file_is_rejected() {
        let result = Preferences::from_toml("window_padding = nan");
        assert!(matches!(result, Err(PreferencesError::InvalidPadding(p)) if p.is_nan()));
    }
}
