//! Application service — compile a collector request into one program.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All collaborator access is routed through injected port traits.

use anyhow::Result;
use tracing::{error, info};

use crate::application::ports::{Inventory, Obfuscator, Repository};
use crate::application::services::tools::add_tool_dependency;
use crate::domain::artifact::Artifact;
use crate::domain::config::Config;
use crate::domain::error::LaunchError;
use crate::domain::request::{CollectorRequest, CompiledProgram, EnvPair, CUSTOM_PREFIX};

/// Compile every artifact named by `request` into a single program.
///
/// Artifacts are resolved in request order (honoring `Custom.` overrides
/// when allowed), access-checked, and merged into one program that runs
/// them serially. Artifact-declared tools are registered with the inventory
/// if unknown, request parameters are merged over declared environment
/// entries, every referenced tool is resolved to delivery metadata, and the
/// obfuscation transform is applied last.
///
/// # Errors
///
/// Fails with [`LaunchError::UnknownArtifact`] for unresolvable names and
/// [`LaunchError::PermissionDenied`] context on policy rejection; any
/// collaborator failure aborts the whole compilation. No partial program is
/// ever returned. The only side effect is first-registration-wins tool
/// declaration, which is idempotent.
pub async fn compile_collector_args(
    config: &Config,
    principal: &str,
    repository: &impl Repository,
    inventory: &impl Inventory,
    obfuscator: &impl Obfuscator,
    request: &CollectorRequest,
) -> Result<CompiledProgram> {
    let mut program = CompiledProgram::from_request(request);

    // All artifacts are compiled into the same program because they all run
    // serially.
    for name in &request.artifacts {
        let mut artifact: Option<Artifact> = None;
        if request.allow_custom_overrides {
            artifact = repository.get(&format!("{CUSTOM_PREFIX}{name}")).await;
        }

        let artifact = match artifact {
            Some(found) => found,
            None => repository
                .get(name)
                .await
                .ok_or_else(|| LaunchError::UnknownArtifact(name.clone()))?,
        };

        repository
            .check_access(config, &artifact, principal)
            .await
            .map_err(|err| {
                err.context(LaunchError::PermissionDenied {
                    artifact: artifact.name.clone(),
                    principal: principal.to_string(),
                })
            })?;

        repository.compile(&artifact, &mut program).await?;

        ensure_tools_declared(config, inventory, &artifact).await?;
    }

    // Add any artifact dependencies.
    repository.populate_dependencies(&mut program).await?;

    add_collector_parameters(&mut program, request);

    add_dependent_tools(config, inventory, &mut program).await?;

    obfuscator.obfuscate(config, &mut program)?;
    Ok(program)
}

/// Make sure the inventory knows about tools the artifact itself declares.
///
/// A bundled descriptor is only registered when the inventory has no entry
/// for the tool; an administrator's prior registration always wins over the
/// artifact's default.
async fn ensure_tools_declared(
    config: &Config,
    inventory: &impl Inventory,
    artifact: &Artifact,
) -> Result<()> {
    for tool in &artifact.tools {
        if inventory.get_tool_info(config, &tool.name).await.is_err() {
            info!(tool = %tool.name, artifact = %artifact.name, "adding tool from artifact");
            inventory.add_tool(config, tool).await?;
        }
    }
    Ok(())
}

/// Resolve every distinct tool the program references into its delivery
/// metadata triple.
async fn add_dependent_tools(
    config: &Config,
    inventory: &impl Inventory,
    program: &mut CompiledProgram,
) -> Result<()> {
    let mut resolved: Vec<String> = Vec::new();
    for tool in program.tools.clone() {
        if resolved.contains(&tool) {
            continue;
        }
        if let Err(err) = add_tool_dependency(config, inventory, &tool, program).await {
            error!(tool = %tool, error = %err, "while adding dependencies");
            return Err(err);
        }
        resolved.push(tool);
    }
    Ok(())
}

/// Merge the request's parameter overrides into the program environment.
///
/// Replace-only semantics: see [`add_or_replace_parameter`]. Overrides never
/// introduce environment keys the program does not already declare.
pub fn add_collector_parameters(program: &mut CompiledProgram, request: &CollectorRequest) {
    for item in &request.parameters {
        add_or_replace_parameter(&mut program.env, item);
    }
}

/// Replace the value of an existing environment key in place.
///
/// An override whose key is not already declared in the environment is
/// silently dropped: only previously-declared keys may be overridden, so a
/// request can never introduce a new, uncontrolled key. This silent drop is
/// a contract, not an oversight.
fn add_or_replace_parameter(env: &mut [EnvPair], param: &EnvPair) {
    // We do not expect many parameters so linear search is appropriate.
    for item in env {
        if item.key == param.key {
            item.value = param.value.clone();
            return;
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
