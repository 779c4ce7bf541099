//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Upstream collaborator failures are
//! not wrapped here; they propagate verbatim with `anyhow` context.

use thiserror::Error;

/// Errors produced by the compile and schedule pipelines.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The request named an artifact the repository does not know.
    #[error("Unknown artifact {0}")]
    UnknownArtifact(String),

    /// The policy collaborator rejected the principal's access to an artifact.
    #[error("Permission denied: {principal} may not collect {artifact}")]
    PermissionDenied { artifact: String, principal: String },

    /// Scheduling requires a non-empty target client identifier.
    #[error("Client id not provided")]
    MissingClientId,

    /// The inventory does not know the named tool.
    #[error("Unknown tool {0}")]
    UnknownTool(String),

    /// Tool resolution needs at least one configured server endpoint.
    #[error("No server URLs configured")]
    NoServerUrls,
}
