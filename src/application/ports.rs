//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that collaborators must fulfill.
//! This file imports only from `crate::domain`. Implementations live with
//! the callers composing the service graph; tests supply in-memory mocks.

use anyhow::Result;
use serde::Serialize;

use crate::domain::artifact::{Artifact, ToolDescriptor};
use crate::domain::config::Config;
use crate::domain::flow_id;
use crate::domain::request::CompiledProgram;
use crate::domain::session::DeliveryTask;

// ── Repository port ──────────────────────────────────────────────────────────

/// The query-definition repository: artifact lookup, access control and plan
/// merging. Access control is delegated to the policy engine behind this
/// trait; this core only propagates its verdict.
#[allow(async_fn_in_trait)]
pub trait Repository {
    /// Look up an artifact by exact name. `None` means unknown.
    async fn get(&self, name: &str) -> Option<Artifact>;

    /// Check whether `principal` may collect `artifact`. An error is a
    /// rejection and aborts compilation.
    async fn check_access(
        &self,
        config: &Config,
        artifact: &Artifact,
        principal: &str,
    ) -> Result<()>;

    /// Merge the artifact's compiled query plan into `program`
    /// (append semantics; artifacts run serially in merge order).
    async fn compile(&self, artifact: &Artifact, program: &mut CompiledProgram) -> Result<()>;

    /// Resolve transitive artifact dependencies, populating any additional
    /// environment or query content the merged program requires.
    async fn populate_dependencies(&self, program: &mut CompiledProgram) -> Result<()>;
}

// ── Inventory port ───────────────────────────────────────────────────────────

/// The tool-inventory service holding delivery metadata for external
/// binaries.
#[allow(async_fn_in_trait)]
pub trait Inventory {
    /// Fetch the descriptor for a tool. An error means the tool is unknown
    /// (or the inventory itself failed).
    async fn get_tool_info(&self, config: &Config, name: &str) -> Result<ToolDescriptor>;

    /// Register a tool descriptor. Implementations must be safe under
    /// concurrent first-write-wins registration; this core never calls it
    /// for a tool the inventory already knows.
    async fn add_tool(&self, config: &Config, tool: &ToolDescriptor) -> Result<()>;
}

// ── Durable store port ───────────────────────────────────────────────────────

/// The durable key-value store and per-client task queue.
#[allow(async_fn_in_trait)]
pub trait Datastore {
    /// Write a record at `path`. Idempotent overwrite-by-path.
    async fn set_subject<T: Serialize + Sync>(
        &self,
        config: &Config,
        path: &str,
        record: &T,
    ) -> Result<()>;

    /// Enqueue a delivery task on the client's durable queue.
    async fn queue_task(&self, config: &Config, client_id: &str, task: &DeliveryTask)
        -> Result<()>;
}

// ── Obfuscation port ─────────────────────────────────────────────────────────

/// Obfuscation transform applied to a finished program, last before it is
/// returned. The transform's details are owned by the collaborator.
pub trait Obfuscator {
    /// Transform `program` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform fails; compilation then aborts.
    fn obfuscate(&self, config: &Config, program: &mut CompiledProgram) -> Result<()>;
}

/// Identity transform for deployments that ship programs in the clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObfuscation;

impl Obfuscator for NoObfuscation {
    fn obfuscate(&self, _config: &Config, _program: &mut CompiledProgram) -> Result<()> {
        Ok(())
    }
}

// ── Identifier source port ───────────────────────────────────────────────────

/// Strategy for minting session identifiers. Injected explicitly so tests
/// can force deterministic ids without any process-wide state.
pub trait FlowIdSource {
    fn new_flow_id(&self, client_id: &str) -> String;
}

/// Production id source: time-ordered random ids from
/// [`flow_id::new_flow_id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFlowIds;

impl FlowIdSource for RandomFlowIds {
    fn new_flow_id(&self, client_id: &str) -> String {
        flow_id::new_flow_id(client_id)
    }
}
