use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use super::ActionDispatcher;
use super::ActionEnv;
use super::ActionTemplate;
use crate::constants::DEFAULT_SHELL;
use crate::constants::ENV_EVENT;

#[derive(Debug)]
pub struct ActionRequest {
    pub action: ActionTemplate,
    pub env: ActionEnv,
}

/// Enqueues actions for the [`ActionExecutor`]. Sending never blocks.
#[derive(Debug, Clone)]
pub struct ShellDispatcher {
    tx: mpsc::UnboundedSender<ActionRequest>,
}

impl ActionDispatcher for ShellDispatcher {
    fn dispatch(
        &self,
        action: &ActionTemplate,
        env: ActionEnv,
    ) {
        debug!(event = env.get(ENV_EVENT).unwrap_or(""), %action, "dispatch action");

        let request = ActionRequest {
            action: action.clone(),
            env,
        };
        if let Err(e) = self.tx.send(request) {
            warn!("action executor is gone, dropping {:?}", e.0.action);
        }
    }
}

/// Background consumer that launches each queued action as `sh -c <action>`.
///
/// Children are reaped in their own tasks; the executor never waits on them,
/// and they are neither awaited nor killed when the executor stops.
pub struct ActionExecutor {
    shell: PathBuf,
    rx: mpsc::UnboundedReceiver<ActionRequest>,
}

impl ActionExecutor {
    pub fn channel() -> (ShellDispatcher, ActionExecutor) {
        Self::with_shell(DEFAULT_SHELL)
    }

    pub fn with_shell(shell: impl Into<PathBuf>) -> (ShellDispatcher, ActionExecutor) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ShellDispatcher { tx },
            ActionExecutor {
                shell: shell.into(),
                rx,
            },
        )
    }

    /// Runs until every [`ShellDispatcher`] clone has been dropped.
    pub async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            self.launch(request);
        }
        debug!("action executor stopped");
    }

    fn launch(
        &self,
        request: ActionRequest,
    ) {
        let ActionRequest { action, env } = request;

        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(action.as_str())
            .envs(env.iter())
            .stdin(Stdio::null());

        match command.spawn() {
            Ok(mut child) => {
                let pid = child.id();
                trace!(?pid, %action, "action started");
                tokio::spawn(async move {
                    match child.wait().await {
                        Ok(status) => debug!(?pid, %status, "action finished"),
                        Err(e) => warn!(?pid, "failed to reap action: {:?}", e),
                    }
                });
            }
            Err(e) => {
                warn!(%action, "failed to launch action: {:?}", e);
            }
        }
    }
}
