use std::path::PathBuf;

use thiserror::Error;

use super::validator::ValidationError;

/// Errors that can arise while reading a map description.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("could not read map file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not in the tagged room format.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The text parsed, but the room graph breaks a map invariant.
    #[error("invalid map: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

impl MapError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        MapError::Syntax {
            line,
            message: message.into(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
