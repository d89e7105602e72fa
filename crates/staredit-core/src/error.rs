//! Error handling for Star Edit
//!
//! Three families of errors exist:
//! - File format errors, raised while reading or writing a project file
//! - Tool errors, raised when a tool is invoked with parameters it cannot use
//! - Project errors, raised by level management (listing, reordering, metadata)
//!
//! All error types use `thiserror`. An empty selection, or undo at the end of
//! the history, is never an error.

use thiserror::Error;

/// Project file error type
///
/// A load that fails with one of these leaves no partially built project behind.
#[derive(Error, Debug)]
pub enum FileFormatError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not valid JSON, or a record has the wrong shape
    #[error("Invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A path record carries a type tag this editor does not know
    #[error("Unknown path type {tag} in level '{level}'")]
    UnknownPathType {
        /// The tag found in the file.
        tag: i64,
        /// Name of the level holding the record.
        level: String,
    },

    /// A path record has neither the reference-point nor the legacy fields
    #[error("Path record in level '{level}' is missing field '{field}'")]
    MissingPathField {
        /// The first field that could not be found.
        field: &'static str,
        /// Name of the level holding the record.
        level: String,
    },

    /// Level bounds are not a proper rectangle
    #[error("Level '{level}' has invalid bounds [{left}, {bottom}, {right}, {top}]")]
    InvalidBounds {
        /// Name of the offending level.
        level: String,
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    },

    /// A sprite or item type is not a whole number that fits an index
    #[error("Invalid {field} {value} in level '{level}'")]
    InvalidIndex {
        /// `sprite` or `type`.
        field: &'static str,
        /// The number as written in the file.
        value: String,
        /// Name of the level holding the record.
        level: String,
    },

    /// The file holds no levels at all
    #[error("Project file contains no levels")]
    EmptyProject,
}

/// Tool error type
///
/// Raised at the tool-invocation boundary, before any model mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// Array tools need a count in `1..=MAX_ARRAY_COUNT`
    #[error("Invalid count {count}: must be between 1 and {max}", max = crate::constants::MAX_ARRAY_COUNT)]
    InvalidCount {
        /// The rejected count.
        count: i64,
    },

    /// Mirror factors must be 1 or -1
    #[error("Invalid mirror factors ({mx}, {my}): each must be 1 or -1")]
    InvalidMirror { mx: f64, my: f64 },

    /// A numeric parameter is not usable
    #[error("Invalid {name}: {reason}")]
    InvalidParameter {
        /// Parameter name as shown to the user.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Dialog text could not be parsed
    #[error("Cannot read {name} from '{input}'")]
    Parse {
        /// Parameter name as shown to the user.
        name: &'static str,
        /// The raw text entered.
        input: String,
    },
}

/// Project error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    /// No level with that id belongs to the project
    #[error("Level {0} not found")]
    LevelNotFound(String),

    /// A project always keeps at least one level
    #[error("Cannot remove the only level of a project")]
    LastLevel,

    /// A level position past the end of the project
    #[error("Level number {index} out of range (project has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Level bounds must satisfy left < right and bottom < top
    #[error("Invalid bounds [{left}, {bottom}, {right}, {top}]")]
    InvalidBounds {
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    },
}

/// Main error type for Star Edit
#[derive(Error, Debug)]
pub enum Error {
    /// Project file error
    #[error(transparent)]
    File(#[from] FileFormatError),

    /// Tool error
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Project error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a project file error
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::File(_))
    }

    /// Check if this is a tool error
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Error::Tool(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
