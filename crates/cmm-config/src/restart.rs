//! Restarting the router process after a config change

use std::process::{Command, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_RESTART_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of a restart attempt. On failure `manual_command` tells the user
/// what to run themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartOutcome {
    pub success: bool,
    pub message: String,
    pub error: Option<String>,
    pub manual_command: String,
}

pub trait Restarter {
    fn restart(&self) -> RestartOutcome;
}

/// Runs an external command (`ccr restart` by default). A command still
/// running after `timeout` is killed and reported as failed.
#[derive(Debug, Clone)]
pub struct CommandRestarter {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandRestarter {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout: DEFAULT_RESTART_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failed(&self, error: String) -> RestartOutcome {
        tracing::warn!(command = %self.command_line(), %error, "router restart failed");
        RestartOutcome {
            success: false,
            message: "could not restart the router automatically; restart it manually".to_string(),
            error: Some(error),
            manual_command: self.command_line(),
        }
    }
}

impl Default for CommandRestarter {
    fn default() -> Self {
        Self::new("ccr", &["restart"])
    }
}

impl Restarter for CommandRestarter {
    fn restart(&self) -> RestartOutcome {
        tracing::info!(command = %self.command_line(), "restarting router");

        match self.run_with_timeout() {
            Ok(Some(status)) if status.success() => RestartOutcome {
                success: true,
                message: "router restarted".to_string(),
                error: None,
                manual_command: self.command_line(),
            },
            Ok(Some(status)) => self.failed(format!("exited with {status}")),
            Ok(None) => self.failed(format!("timed out after {:?}", self.timeout)),
            Err(e) => self.failed(e.to_string()),
        }
    }
}

impl CommandRestarter {
    /// `Ok(None)` when the child had to be killed
    fn run_with_timeout(&self) -> std::io::Result<Option<ExitStatus>> {
        let mut child = Command::new(&self.program).args(&self.args).spawn()?;
        let start = Instant::now();

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if start.elapsed() >= self.timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}
