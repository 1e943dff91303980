//! Startup errors
//!
//! Nothing inside the frame loop can fail; every error here happens before
//! the first frame and aborts startup.

use std::fmt;
use std::path::PathBuf;

/// Settings file could not be read or parsed
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to read settings from {}: {}", path.display(), source)
            }
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// The game could not be initialized
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// Playfield extents must be finite and positive
    InvalidPlayfield { width: f64, height: f64 },
    /// Per-kind box dimensions must be finite and positive
    InvalidDimensions {
        kind: &'static str,
        width: f64,
        height: f64,
    },
    /// A tuning value is out of range
    InvalidTuning { name: &'static str, value: f64 },
    /// The surface was already closed when the game was created
    SurfaceClosed,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidPlayfield { width, height } => {
                write!(f, "invalid playfield {}x{}", width, height)
            }
            InitError::InvalidDimensions { kind, width, height } => {
                write!(f, "invalid {} dimensions {}x{}", kind, width, height)
            }
            InitError::InvalidTuning { name, value } => {
                write!(f, "invalid value for {}: {}", name, value)
            }
            InitError::SurfaceClosed => write!(f, "surface is not open"),
        }
    }
}

impl std::error::Error for InitError {}
