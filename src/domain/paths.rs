//! Deterministic datastore paths for collection sessions.
//!
//! Paths are pure functions of (client id, session id) so a session can be
//! re-read by id without any index.

/// Derives the datastore locations for one collection session.
#[derive(Debug, Clone)]
pub struct FlowPathManager {
    client_id: String,
    session_id: String,
}

impl FlowPathManager {
    #[must_use]
    pub fn new(client_id: &str, session_id: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            session_id: session_id.to_string(),
        }
    }

    /// Path of the session record itself.
    #[must_use]
    pub fn path(&self) -> String {
        format!("clients/{}/collections/{}", self.client_id, self.session_id)
    }

    /// Path of the task provenance record, derived from the session path.
    #[must_use]
    pub fn task_path(&self) -> String {
        format!("{}/task", self.path())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
