//! Artifact and tool descriptor value types.
//!
//! Artifacts are owned by the repository collaborator and immutable once
//! loaded; tool descriptors are owned by the inventory collaborator. This
//! core only reads them.

use serde::{Deserialize, Serialize};

/// A named, versioned query definition held by the artifact repository.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Artifact {
    /// Canonical artifact name, e.g. `Windows.System.Pslist`.
    pub name: String,

    /// The artifact's compiled query plan: statements merged into a program
    /// in declaration order.
    pub compiled_plan: Vec<String>,

    /// Tools this artifact declares it needs delivered alongside the
    /// program. Each carries a bundled default descriptor which the
    /// inventory may already override.
    pub tools: Vec<ToolDescriptor>,

    /// Access-control metadata consumed by the policy collaborator.
    pub required_permission: Option<String>,
}

/// Delivery metadata for one external binary dependency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: String,

    /// Content hash of the tool binary.
    pub hash: String,

    /// Filename the client should materialize the tool as.
    pub filename: String,

    /// Explicit third-party download URL. Only honored when
    /// `serve_locally` is false.
    pub url: String,

    /// When true the tool is always served from this system's own file
    /// store, even if `url` is set.
    pub serve_locally: bool,

    /// Location of the binary within the server file store.
    pub filestore_path: String,
}
