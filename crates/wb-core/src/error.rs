//! Error types used throughout the crate.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An edge in the template points at a location that does not exist.
    #[error("dangling edge: \"{location}\" leads {direction} to unknown location \"{target}\"")]
    DanglingEdge {
        /// The location the edge starts from.
        location: String,
        /// The direction of the broken edge.
        direction: String,
        /// The destination name that failed to resolve.
        target: String,
    },

    /// A named location does not exist in the world.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(String),

    /// The template could not be parsed as JSON.
    #[error("malformed template: {0}")]
    Parse(#[from] serde_json::Error),

    /// The template file could not be read.
    #[error("failed to read template: {0}")]
    Io(#[from] std::io::Error),
}
