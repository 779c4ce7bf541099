//! Durable collection-session and delivery-task records.

use serde::{Deserialize, Serialize};

use crate::domain::request::{CollectorRequest, CompiledProgram};

/// Routing tag identifying "process compiled program" as the handler for a
/// delivery task. Fixed for every task this core enqueues.
pub const PROCESS_COMPILED_PROGRAM: u64 = 1;

/// Lifecycle state of a collection session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowState {
    Running,
    Finished,
    Error,
}

/// One durable record of one scheduled collection run.
///
/// Created exactly once per scheduling call and never mutated by this core
/// after it is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSession {
    pub session_id: String,

    /// Creation time in microseconds since the Unix epoch.
    pub create_time: u64,

    pub state: FlowState,

    /// The original request, embedded for audit and re-collection.
    pub request: CollectorRequest,

    pub client_id: String,
}

/// One queued unit of delivery: a compiled program bound for one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryTask {
    /// Matches exactly one persisted [`CollectionSession`].
    pub session_id: String,

    /// Always [`PROCESS_COMPILED_PROGRAM`].
    pub request_id: u64,

    pub payload: CompiledProgram,

    /// Copied from the originating request.
    pub urgent: bool,
}

/// Provenance record: the tasks actually enqueued for one session, persisted
/// after the last enqueue for later audit of exactly what was dispatched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskManifest {
    pub items: Vec<DeliveryTask>,
}
