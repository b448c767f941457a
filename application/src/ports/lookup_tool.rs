//! Lookup tool port
//!
//! Defines how the application layer validates and launches a lookup tool.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use osrf_domain::ToolKind;
use thiserror::Error;

/// Errors raised while handing an argument vector over to a lookup tool
#[derive(Error, Debug)]
pub enum ToolDispatchError {
    #[error("invalid arguments for {tool}: {message}")]
    Parse { tool: ToolKind, message: String },

    #[error("executable '{program}' for {tool} was not found")]
    ExecutableNotFound { tool: ToolKind, program: String },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {code}")]
    ExitStatus { tool: ToolKind, code: i32 },

    #[error("{0} was terminated by a signal")]
    Terminated(ToolKind),

    #[error("{0} was interrupted")]
    Interrupted(ToolKind),
}

/// An argument vector accepted by the tool's own parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupInvocation {
    pub tool: ToolKind,
    pub arguments: Vec<String>,
}

impl LookupInvocation {
    pub fn new(tool: ToolKind, arguments: Vec<String>) -> Self {
        Self { tool, arguments }
    }
}

/// Port for the lookup tools wrapped by the console
#[async_trait]
pub trait LookupToolPort: Send + Sync {
    /// Validate an argument vector with the tool's own parser
    fn parse(
        &self,
        tool: ToolKind,
        arguments: &[String],
    ) -> Result<LookupInvocation, ToolDispatchError>;

    /// Run the tool's entry point; the tool performs its own output
    async fn launch(&self, invocation: &LookupInvocation) -> Result<(), ToolDispatchError>;
}
