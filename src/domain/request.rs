//! Collection requests and the compiled programs built from them.

use serde::{Deserialize, Serialize};

/// Hard ceiling on rows a single program may return, independent of caller
/// input.
pub const MAX_ROWS: u64 = 1000;

/// Prefix under which custom artifact overrides are looked up.
pub const CUSTOM_PREFIX: &str = "Custom.";

/// One ordered environment key/value pair inside a compiled program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl EnvPair {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Caller input naming the artifacts to collect and the target client.
///
/// Transient; never persisted as-is, but embedded inside the durable
/// [`CollectionSession`](crate::domain::session::CollectionSession) record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectorRequest {
    /// Target client identifier. Required; scheduling fails without it.
    pub client_id: String,

    /// Ordered artifact names to compile into one program.
    pub artifacts: Vec<String>,

    /// Request-level parameter overrides. Only keys the compiled program
    /// already declares may be overridden; unknown keys are dropped.
    pub parameters: Vec<EnvPair>,

    /// Whether `Custom.<name>` variants take precedence over plain names.
    pub allow_custom_overrides: bool,

    /// Copied onto every delivery task so the client prioritizes it.
    pub urgent: bool,

    /// Rate limit the client applies while executing the program.
    pub ops_per_second: f32,

    /// Execution timeout in seconds, enforced by the client.
    pub timeout: u64,

    /// Caller-supplied compilation cache. When non-empty the scheduler
    /// uses these programs verbatim and never touches the repository or
    /// inventory.
    #[serde(default)]
    pub compiled_programs: Vec<CompiledProgram>,
}

/// The executable unit delivered to a client.
///
/// Built once per request (or supplied pre-built by the caller) and treated
/// as immutable thereafter. Caching across retries is valid because
/// compilation is a pure function of (request, repository state, inventory
/// state) at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompiledProgram {
    pub ops_per_second: f32,
    pub timeout: u64,

    /// Always [`MAX_ROWS`]; carried explicitly so clients need no shared
    /// constant.
    pub max_rows: u64,

    /// Merged query plan, artifact order preserved. Artifacts run serially
    /// within one program.
    pub query: Vec<String>,

    /// Ordered environment entries: tool metadata and parameters.
    pub env: Vec<EnvPair>,

    /// Names of every tool the program references.
    pub tools: Vec<String>,
}

impl CompiledProgram {
    /// Program seeded from a request's resource limits and the fixed row cap.
    #[must_use]
    pub fn from_request(request: &CollectorRequest) -> Self {
        Self {
            ops_per_second: request.ops_per_second,
            timeout: request.timeout,
            max_rows: MAX_ROWS,
            ..Self::default()
        }
    }

    /// Append an environment entry.
    pub fn push_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.push(EnvPair::new(key, value));
    }

    /// Record a tool reference, keeping the list free of duplicates so each
    /// distinct tool resolves to exactly one metadata triple.
    pub fn require_tool(&mut self, name: &str) {
        if !self.tools.iter().any(|t| t == name) {
            self.tools.push(name.to_string());
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
