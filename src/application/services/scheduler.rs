//! Application service — persist a collection session and enqueue delivery.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{Datastore, FlowIdSource, Inventory, Obfuscator, Repository};
use crate::application::services::compiler::compile_collector_args;
use crate::domain::config::Config;
use crate::domain::error::LaunchError;
use crate::domain::paths::FlowPathManager;
use crate::domain::request::{CollectorRequest, CompiledProgram};
use crate::domain::session::{
    CollectionSession, DeliveryTask, FlowState, TaskManifest, PROCESS_COMPILED_PROGRAM,
};

/// Schedule a collection against the request's target client.
///
/// A caller-supplied pre-compiled program cache is used verbatim; otherwise
/// the request is compiled here. Compilation is a pure function of the
/// request and collaborator state at this instant, so reusing the cache
/// across retries is sound.
///
/// # Errors
///
/// Propagates compilation failures and every scheduling failure from
/// [`schedule_from_compiled`].
pub async fn schedule_artifact_collection(
    config: &Config,
    principal: &str,
    repository: &impl Repository,
    inventory: &impl Inventory,
    obfuscator: &impl Obfuscator,
    flow_ids: &impl FlowIdSource,
    datastore: &impl Datastore,
    request: &CollectorRequest,
) -> Result<String> {
    let programs = if request.compiled_programs.is_empty() {
        vec![
            compile_collector_args(config, principal, repository, inventory, obfuscator, request)
                .await?,
        ]
    } else {
        request.compiled_programs.clone()
    };

    schedule_from_compiled(config, flow_ids, datastore, request, &programs).await
}

/// Create the durable session record and enqueue one delivery task per
/// compiled program.
///
/// The session is persisted before any task is enqueued, so a task can
/// never reference a non-existent session. A failure mid-way leaves earlier
/// effects in place: an already-persisted session survives an enqueue
/// failure, and already-enqueued tasks are not rolled back. Callers must
/// treat a failed call as possibly partially applied; retrying is safe
/// because each attempt mints a fresh session id.
///
/// # Errors
///
/// Fails with [`LaunchError::MissingClientId`] before any persistence when
/// the request has no target client; datastore failures propagate verbatim.
pub async fn schedule_from_compiled(
    config: &Config,
    flow_ids: &impl FlowIdSource,
    datastore: &impl Datastore,
    request: &CollectorRequest,
    programs: &[CompiledProgram],
) -> Result<String> {
    if request.client_id.is_empty() {
        return Err(LaunchError::MissingClientId.into());
    }
    let client_id = &request.client_id;

    let session = CollectionSession {
        session_id: flow_ids.new_flow_id(client_id),
        create_time: now_micros(),
        state: FlowState::Running,
        request: request.clone(),
        client_id: client_id.clone(),
    };

    // Save the collection session before anything references it.
    let flow_paths = FlowPathManager::new(client_id, &session.session_id);
    datastore
        .set_subject(config, &flow_paths.path(), &session)
        .await
        .context("persisting collection session")?;
    debug!(session_id = %session.session_id, client_id = %client_id, "collection session created");

    let mut tasks = Vec::with_capacity(programs.len());
    for program in programs {
        let task = DeliveryTask {
            session_id: session.session_id.clone(),
            request_id: PROCESS_COMPILED_PROGRAM,
            payload: program.clone(),
            urgent: request.urgent,
        };

        datastore
            .queue_task(config, client_id, &task)
            .await
            .context("enqueuing delivery task")?;
        tasks.push(task);
    }

    // Record the tasks for provenance of what we actually dispatched.
    datastore
        .set_subject(config, &flow_paths.task_path(), &TaskManifest { items: tasks })
        .await
        .context("persisting task provenance")?;

    Ok(session.session_id)
}

/// Current wall-clock time in microseconds since the Unix epoch.
fn now_micros() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_micros()).unwrap_or(0)
}
