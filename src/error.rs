//! Error types for ingesting files and wiring the page.

use thiserror::Error;

use crate::assembler::AssembleError;

/// Why processing a selected file failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The file's contents could not be read as text.
    #[error("could not read {file_name}: {message}")]
    Read { file_name: String, message: String },

    /// The assembler failed on the file's contents.
    #[error("assembling {file_name} failed: {source}")]
    Assemble {
        file_name: String,
        #[source]
        source: AssembleError,
    },

    /// The host refused to save the listing.
    #[error("could not download {file_name}: {message}")]
    Download { file_name: String, message: String },
}

impl IngestError {
    /// Name of the file the failure concerns.
    pub fn file_name(&self) -> &str {
        match self {
            IngestError::Read { file_name, .. }
            | IngestError::Assemble { file_name, .. }
            | IngestError::Download { file_name, .. } => file_name,
        }
    }
}

/// Why the page could not be wired up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("element `{0}` is not an <input type=\"file\">")]
    NotAFileInput(String),

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),

    #[error("the page is already started")]
    AlreadyStarted,
}
