//! Process launcher for the lookup tools
//!
//! Every tool is an external executable (`usufy`, `mailfy`, ...) that prints
//! its own results. The launcher validates the argument vector with the
//! tool's parser, resolves the executable on `PATH` and runs it with the
//! console's stdio attached.
//!
//! Ctrl-C while a tool runs interrupts the tool, not the console: the child
//! gets a grace period to exit (it receives the same SIGINT from the
//! terminal) and is killed afterwards.

use super::args::ToolArguments;
use async_trait::async_trait;
use osrf_application::{LookupInvocation, LookupToolPort, ToolDispatchError};
use osrf_domain::ToolKind;
use std::collections::BTreeMap;
use std::future::Future;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::config::FileConfig;

/// Launches lookup tools as child processes
#[derive(Debug, Clone)]
pub struct ProcessLookupTool {
    /// Executable per tool (name or path)
    executables: BTreeMap<ToolKind, String>,
    /// Time an interrupted tool gets to exit before it is killed
    grace_period: Duration,
}

const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

impl Default for ProcessLookupTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLookupTool {
    /// Launcher using each tool's name as its executable
    pub fn new() -> Self {
        Self {
            executables: ToolKind::ALL
                .iter()
                .map(|tool| (*tool, tool.name().to_string()))
                .collect(),
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    /// Launcher honoring `executable` overrides of `[tools.<name>]`
    pub fn from_config(config: &FileConfig) -> Self {
        Self {
            executables: ToolKind::ALL
                .iter()
                .map(|tool| (*tool, config.executable(*tool)))
                .collect(),
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    pub fn with_executable(mut self, tool: ToolKind, program: impl Into<String>) -> Self {
        self.executables.insert(tool, program.into());
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn executable(&self, tool: ToolKind) -> &str {
        self.executables
            .get(&tool)
            .map(String::as_str)
            .unwrap_or_else(|| tool.name())
    }

    /// Check if a tool's executable can be found
    pub fn is_available(&self, tool: ToolKind) -> bool {
        which::which(self.executable(tool)).is_ok()
    }

    /// Wait for a running tool, giving up on it once `interrupt` resolves
    async fn wait_for(
        &self,
        tool: ToolKind,
        program: &str,
        mut child: Child,
        interrupt: impl Future<Output = ()>,
    ) -> Result<ExitStatus, ToolDispatchError> {
        tokio::select! {
            status = child.wait() => {
                return status.map_err(|source| ToolDispatchError::Spawn {
                    program: program.to_string(),
                    source,
                });
            }
            _ = interrupt => {}
        }

        warn!("{} interrupted, waiting for it to exit", tool);
        if tokio::time::timeout(self.grace_period, child.wait())
            .await
            .is_err()
        {
            debug!("{} still running after {:?}, killing it", tool, self.grace_period);
            if let Err(e) = child.kill().await {
                warn!("Failed to kill {}: {}", program, e);
            }
        }
        Err(ToolDispatchError::Interrupted(tool))
    }
}

/// Resolves on Ctrl-C; never resolves when the signal cannot be listened for
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[async_trait]
impl LookupToolPort for ProcessLookupTool {
    fn parse(
        &self,
        tool: ToolKind,
        arguments: &[String],
    ) -> Result<LookupInvocation, ToolDispatchError> {
        ToolArguments::parse(tool, arguments).map_err(|e| ToolDispatchError::Parse {
            tool,
            message: e.to_string().trim().to_string(),
        })?;
        Ok(LookupInvocation::new(tool, arguments.to_vec()))
    }

    async fn launch(&self, invocation: &LookupInvocation) -> Result<(), ToolDispatchError> {
        let program = self.executable(invocation.tool);
        let path = which::which(program).map_err(|_| ToolDispatchError::ExecutableNotFound {
            tool: invocation.tool,
            program: program.to_string(),
        })?;
        debug!("Resolved {} to {}", program, path.display());

        let child = Command::new(&path)
            .args(&invocation.arguments)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ToolDispatchError::Spawn {
                program: program.to_string(),
                source,
            })?;
        let status = self
            .wait_for(invocation.tool, program, child, ctrl_c())
            .await?;

        info!("{} finished with {}", invocation.tool, status);

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ToolDispatchError::ExitStatus {
                tool: invocation.tool,
                code,
            }),
            None => Err(ToolDispatchError::Terminated(invocation.tool)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_executables_are_tool_names() {
        let launcher = ProcessLookupTool::new();
        for tool in ToolKind::ALL {
            assert_eq!(launcher.executable(tool), tool.name());
        }
    }

    #[test]
    fn test_from_config_overrides() {
        let config: FileConfig =
            toml::from_str("[tools.usufy]\nexecutable = \"/opt/osrf/bin/usufy\"\n").unwrap();
        let launcher = ProcessLookupTool::from_config(&config);
        assert_eq!(launcher.executable(ToolKind::Usufy), "/opt/osrf/bin/usufy");
        assert_eq!(launcher.executable(ToolKind::Mailfy), "mailfy");
    }

    #[test]
    fn test_parse_accepts_valid_vector() {
        let launcher = ProcessLookupTool::new();
        let args = argv(&["-n", "johndoe", "-p", "all", "-T", "32", "-o", "./", "-e", "csv"]);
        let invocation = launcher.parse(ToolKind::Usufy, &args).unwrap();
        assert_eq!(invocation.tool, ToolKind::Usufy);
        assert_eq!(invocation.arguments, args);
    }

    #[test]
    fn test_parse_rejects_invalid_vector() {
        let launcher = ProcessLookupTool::new();
        let err = launcher
            .parse(ToolKind::Entify, &argv(&["-r", "email"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolDispatchError::Parse {
                tool: ToolKind::Entify,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_launch_missing_executable() {
        let launcher = ProcessLookupTool::new()
            .with_executable(ToolKind::Usufy, "osrf-definitely-not-installed-usufy");
        let invocation = LookupInvocation::new(ToolKind::Usufy, argv(&["-n", "johndoe"]));

        let err = launcher.launch(&invocation).await.unwrap_err();
        assert!(matches!(err, ToolDispatchError::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_reports_exit_status() {
        let launcher = ProcessLookupTool::new()
            .with_executable(ToolKind::Mailfy, "true")
            .with_executable(ToolKind::Phonefy, "false");

        let ok = LookupInvocation::new(ToolKind::Mailfy, Vec::new());
        assert!(launcher.launch(&ok).await.is_ok());

        let failing = LookupInvocation::new(ToolKind::Phonefy, Vec::new());
        match launcher.launch(&failing).await {
            Err(ToolDispatchError::ExitStatus { tool, code }) => {
                assert_eq!(tool, ToolKind::Phonefy);
                assert_eq!(code, 1);
            }
            other => panic!("expected exit status error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_interrupt_stops_a_running_tool() {
        let launcher = ProcessLookupTool::new().with_grace_period(Duration::from_millis(100));
        let child = Command::new("sleep").arg("30").spawn().unwrap();

        let started = std::time::Instant::now();
        let err = launcher
            .wait_for(ToolKind::Usufy, "sleep", child, async {})
            .await
            .unwrap_err();

        assert!(matches!(err, ToolDispatchError::Interrupted(ToolKind::Usufy)));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tool_finishing_first_is_not_interrupted() {
        let launcher = ProcessLookupTool::new();
        let child = Command::new("true").spawn().unwrap();

        let status = launcher
            .wait_for(ToolKind::Usufy, "true", child, std::future::pending())
            .await
            .unwrap();
        assert!(status.success());
    }
}
