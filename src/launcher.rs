//! Launching agent processes for accepted tasks.
//!
//! One task maps to one detached child process. Nothing here waits for,
//! tracks, or restarts a launched agent.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

/// Errors raised when a task cannot be handed to an agent process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("agent command is empty")]
    EmptyCommand,

    #[error("agent command is not parseable: {0}")]
    BadCommand(#[from] shell_words::ParseError),

    #[error("failed to spawn agent process: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Turns an accepted task into a running agent.
#[async_trait]
pub trait AgentLauncher: Send + Sync {
    /// Start an agent for `task`.
    ///
    /// Fire-and-forget: implementations must return once the agent is
    /// started, without waiting for it to finish.
    async fn launch(&self, task: &str) -> Result<(), LaunchError>;
}

/// Launcher that spawns the configured command line as a detached child.
///
/// The child inherits the server's environment (including `GOOGLE_API_KEY`)
/// and outlives the request that created it.
pub struct ProcessLauncher {
    command: String,
}

impl ProcessLauncher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl AgentLauncher for ProcessLauncher {
    async fn launch(&self, task: &str) -> Result<(), LaunchError> {
        let words = shell_words::split(&self.command)?;
        let (program, args) = words.split_first().ok_or(LaunchError::EmptyCommand)?;

        // The Child handle is dropped without being awaited, so the
        // agent keeps running on its own.
        let child = Command::new(program)
            .args(args)
            .arg("--objective")
            .arg(task)
            .spawn()?;

        info!(
            "Agent for task '{}' launched (pid {:?})",
            task,
            child.id()
        );
        Ok(())
    }
}
