//! Error types for MyProgram

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using MyProgram's Error
pub type Result<T> = std::result::Result<T, Error>;

/// MyProgram error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Config errors (E600-E699)
    #[error("Could not determine the home directory. Set the HOME environment variable.")]
    HomeDirUnavailable,

    #[error("Failed to create config directory {}: {source}", .path.display())]
    ConfigDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::HomeDirUnavailable => "E600",
            Self::ConfigDirCreation { .. } => "E601",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::HomeDirUnavailable => Some("export HOME=/path/to/home".to_string()),
            Self::ConfigDirCreation { path, .. } => Some(format!(
                "Check permissions on {}",
                path.parent().unwrap_or(path).display()
            )),
            Self::Io(_) => None,
        }
    }
}
