//! Run Tool use case
//!
//! Implements the `run` command of a tool console:
//!
//! 1. Refuse while any required option is unset
//! 2. Build the argument vector from the current option values
//! 3. Validate it with the tool's own parser
//! 4. Launch the entry point of that same tool

use crate::ports::lookup_tool::{LookupInvocation, LookupToolPort, ToolDispatchError};
use osrf_domain::{OptionRegistry, ToolKind};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while running a tool
#[derive(Error, Debug)]
pub enum RunToolError {
    #[error("There are required parameters which have not been set: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error(transparent)]
    Dispatch(#[from] ToolDispatchError),
}

impl RunToolError {
    /// Whether the run never reached the tool
    pub fn is_refusal(&self) -> bool {
        matches!(self, RunToolError::MissingRequired(_))
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunToolOutput {
    pub tool: ToolKind,
    pub arguments: Vec<String>,
}

/// Use case for dispatching a configured tool
pub struct RunToolUseCase<L: LookupToolPort + ?Sized + 'static> {
    launcher: Arc<L>,
}

impl<L: LookupToolPort + ?Sized + 'static> RunToolUseCase<L> {
    pub fn new(launcher: Arc<L>) -> Self {
        Self { launcher }
    }

    /// Check required options, build and validate the argument vector
    pub fn prepare(
        &self,
        tool: ToolKind,
        registry: &OptionRegistry,
    ) -> Result<LookupInvocation, RunToolError> {
        let missing = registry.missing_required();
        if !missing.is_empty() {
            debug!("Refusing to run {}: missing {:?}", tool, missing);
            return Err(RunToolError::MissingRequired(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let arguments = tool.arguments(registry);
        debug!("Built arguments for {}: {:?}", tool, arguments);

        self.launcher.parse(tool, &arguments).map_err(|e| {
            error!("Parser rejected arguments for {}: {}", tool, e);
            RunToolError::from(e)
        })
    }

    /// Launch a prepared invocation
    pub async fn launch(&self, invocation: &LookupInvocation) -> Result<(), RunToolError> {
        info!(
            "Launching {} with {} arguments",
            invocation.tool,
            invocation.arguments.len()
        );

        self.launcher.launch(invocation).await.map_err(|e| {
            error!("Something happened when launching {}: {}", invocation.tool, e);
            RunToolError::from(e)
        })
    }

    /// Prepare and launch in one step
    pub async fn execute(
        &self,
        tool: ToolKind,
        registry: &OptionRegistry,
    ) -> Result<RunToolOutput, RunToolError> {
        let invocation = self.prepare(tool, registry)?;
        self.launch(&invocation).await?;
        Ok(RunToolOutput {
            tool: invocation.tool,
            arguments: invocation.arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use osrf_domain::ToolDefaults;
    use std::sync::Mutex;

    /// Mock launcher that records which tool was parsed and launched
    struct MockLauncher {
        parsed: Mutex<Vec<ToolKind>>,
        launched: Mutex<Vec<LookupInvocation>>,
        reject_parse: bool,
        fail_launch: bool,
    }

    impl MockLauncher {
        fn new() -> Self {
            Self {
                parsed: Mutex::new(Vec::new()),
                launched: Mutex::new(Vec::new()),
                reject_parse: false,
                fail_launch: false,
            }
        }
    }

    #[async_trait]
    impl LookupToolPort for MockLauncher {
        fn parse(
            &self,
            tool: ToolKind,
            arguments: &[String],
        ) -> Result<LookupInvocation, ToolDispatchError> {
            self.parsed.lock().unwrap().push(tool);
            if self.reject_parse {
                return Err(ToolDispatchError::Parse {
                    tool,
                    message: "unexpected argument".to_string(),
                });
            }
            Ok(LookupInvocation::new(tool, arguments.to_vec()))
        }

        async fn launch(&self, invocation: &LookupInvocation) -> Result<(), ToolDispatchError> {
            self.launched.lock().unwrap().push(invocation.clone());
            if self.fail_launch {
                return Err(ToolDispatchError::ExitStatus {
                    tool: invocation.tool,
                    code: 1,
                });
            }
            Ok(())
        }
    }

    fn registry(tool: ToolKind) -> OptionRegistry {
        tool.registry(&ToolDefaults::builtin(tool))
    }

    #[tokio::test]
    async fn test_run_refused_without_required() {
        let launcher = Arc::new(MockLauncher::new());
        let use_case = RunToolUseCase::new(launcher.clone());

        let result = use_case
            .execute(ToolKind::Domainfy, &registry(ToolKind::Domainfy))
            .await;

        match result {
            Err(RunToolError::MissingRequired(missing)) => assert_eq!(missing, vec!["NICK"]),
            other => panic!("expected refusal, got {other:?}"),
        }
        assert!(launcher.parsed.lock().unwrap().is_empty());
        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_usufy_dispatch() {
        let launcher = Arc::new(MockLauncher::new());
        let use_case = RunToolUseCase::new(launcher.clone());
        let mut reg = registry(ToolKind::Usufy);
        reg.set("NICK", "johndoe").unwrap();

        let output = use_case.execute(ToolKind::Usufy, &reg).await.unwrap();
        assert_eq!(
            output.arguments,
            vec!["-n", "johndoe", "-p", "all", "-T", "32", "-o", "./", "-e", "csv"]
        );

        let launched = launcher.launched.lock().unwrap();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].tool, ToolKind::Usufy);
    }

    #[tokio::test]
    async fn test_each_tool_routes_to_itself() {
        let launcher = Arc::new(MockLauncher::new());
        let use_case = RunToolUseCase::new(launcher.clone());

        for tool in ToolKind::ALL {
            let mut reg = registry(tool);
            for name in reg.missing_required().into_iter().map(String::from).collect::<Vec<_>>() {
                reg.set(&name, "value").unwrap();
            }
            use_case.execute(tool, &reg).await.unwrap();
        }

        let launched: Vec<_> = launcher
            .launched
            .lock()
            .unwrap()
            .iter()
            .map(|i| i.tool)
            .collect();
        assert_eq!(launched, ToolKind::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_parse_failure_is_dispatch_error() {
        let mut mock = MockLauncher::new();
        mock.reject_parse = true;
        let launcher = Arc::new(mock);
        let use_case = RunToolUseCase::new(launcher.clone());
        let mut reg = registry(ToolKind::Usufy);
        reg.set("NICK", "johndoe").unwrap();

        let err = use_case.execute(ToolKind::Usufy, &reg).await.unwrap_err();
        assert!(matches!(
            err,
            RunToolError::Dispatch(ToolDispatchError::Parse { .. })
        ));
        assert!(!err.is_refusal());
        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_launch_failure_is_reported() {
        let mut mock = MockLauncher::new();
        mock.fail_launch = true;
        let use_case = RunToolUseCase::new(Arc::new(mock));
        let mut reg = registry(ToolKind::Entify);
        reg.set("URL", "https://example.com").unwrap();

        let err = use_case.execute(ToolKind::Entify, &reg).await.unwrap_err();
        assert_eq!(err.to_string(), "entify exited with status 1");
    }

    #[test]
    fn test_missing_required_message() {
        let err = RunToolError::MissingRequired(vec!["NICK".to_string()]);
        assert!(err.is_refusal());
        assert_eq!(
            err.to_string(),
            "There are required parameters which have not been set: NICK"
        );
    }
}
