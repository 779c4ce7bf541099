//! Launcher facade — the single entry point callers compose at startup.
//!
//! The service graph is built with explicit constructor injection rather
//! than a process-wide registry: the facade owns its inventory, obfuscator,
//! id source and datastore, while the repository and principal stay per-call
//! arguments so callers with different repository views can share one
//! launcher.

use anyhow::Result;

use crate::application::ports::{Datastore, FlowIdSource, Inventory, Obfuscator, Repository};
use crate::application::services::{compiler, scheduler};
use crate::domain::config::Config;
use crate::domain::request::{CollectorRequest, CompiledProgram};

/// Composes the compiler and scheduler behind one entry point.
pub struct Launcher<I, O, G, D> {
    inventory: I,
    obfuscator: O,
    flow_ids: G,
    datastore: D,
}

impl<I, O, G, D> Launcher<I, O, G, D>
where
    I: Inventory,
    O: Obfuscator,
    G: FlowIdSource,
    D: Datastore,
{
    pub fn new(inventory: I, obfuscator: O, flow_ids: G, datastore: D) -> Self {
        Self {
            inventory,
            obfuscator,
            flow_ids,
            datastore,
        }
    }

    /// Compile a request into one program without scheduling it.
    ///
    /// # Errors
    ///
    /// See [`compiler::compile_collector_args`].
    pub async fn compile_collector_args(
        &self,
        config: &Config,
        principal: &str,
        repository: &impl Repository,
        request: &CollectorRequest,
    ) -> Result<CompiledProgram> {
        compiler::compile_collector_args(
            config,
            principal,
            repository,
            &self.inventory,
            &self.obfuscator,
            request,
        )
        .await
    }

    /// Compile (or reuse the request's cached programs) and schedule the
    /// collection, returning the new session identifier.
    ///
    /// # Errors
    ///
    /// See [`scheduler::schedule_artifact_collection`].
    pub async fn schedule_artifact_collection(
        &self,
        config: &Config,
        principal: &str,
        repository: &impl Repository,
        request: &CollectorRequest,
    ) -> Result<String> {
        scheduler::schedule_artifact_collection(
            config,
            principal,
            repository,
            &self.inventory,
            &self.obfuscator,
            &self.flow_ids,
            &self.datastore,
            request,
        )
        .await
    }
}
