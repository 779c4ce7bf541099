//! Application service — resolve a tool into client delivery metadata.

use anyhow::Result;

use crate::application::ports::Inventory;
use crate::domain::config::{Config, PUBLIC_PATH_PREFIX};
use crate::domain::error::LaunchError;
use crate::domain::request::CompiledProgram;

/// Resolve `tool` through the inventory and append its metadata triple
/// (`Tool_<name>_HASH`, `Tool_<name>_FILENAME`, `Tool_<name>_URL`) to the
/// program environment.
///
/// The download URL defaults to the first configured server URL plus the
/// public file-store path. A descriptor marked not-served-locally with an
/// explicit URL is fetched from that third-party location instead.
///
/// # Errors
///
/// Propagates the inventory's error for unknown tools and fails with
/// [`LaunchError::NoServerUrls`] when no server endpoint is configured.
pub async fn add_tool_dependency(
    config: &Config,
    inventory: &impl Inventory,
    tool: &str,
    program: &mut CompiledProgram,
) -> Result<()> {
    let tool_info = inventory.get_tool_info(config, tool).await?;

    program.push_env(format!("Tool_{}_HASH", tool_info.name), &tool_info.hash);
    program.push_env(
        format!("Tool_{}_FILENAME", tool_info.name),
        &tool_info.filename,
    );

    let Some(server_url) = config.client.server_urls.first() else {
        return Err(LaunchError::NoServerUrls.into());
    };

    // Where to download the binary from.
    let mut url = format!("{server_url}{PUBLIC_PATH_PREFIX}{}", tool_info.filestore_path);

    // If we do not want to serve the binary locally, just tell the client
    // where to get it from.
    if !tool_info.serve_locally && !tool_info.url.is_empty() {
        url = tool_info.url.clone();
    }
    program.push_env(format!("Tool_{}_URL", tool_info.name), url);

    Ok(())
}
