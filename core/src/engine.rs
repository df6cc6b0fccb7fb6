use std::process::Stdio;

use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine command not configured")]
    NotConfigured,
}

/// Boundary to the externally owned execution engine.
///
/// The shim only starts the engine and observes whether startup
/// succeeded; everything past that point belongs to the engine.
pub trait Engine {
    fn start(&mut self) -> bool;
}

/// Engine backed by an external command started headlessly.
pub struct ProcessEngine {
    command: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl ProcessEngine {
    pub fn new(command: String, args: Vec<String>) -> Result<Self, EngineError> {
        if command.is_empty() {
            return Err(EngineError::NotConfigured);
        }
        Ok(Self {
            command,
            args,
            child: None,
        })
    }
}

impl Engine for ProcessEngine {
    fn start(&mut self) -> bool {
        if self.child.is_some() {
            return true;
        }
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        match cmd.spawn() {
            Ok(child) => {
                info!("engine started: {}", self.command);
                self.child = Some(child);
                true
            }
            Err(err) => {
                warn!("engine {} failed to start: {err}", self.command);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_reports_true_for_runnable_command() {
        let mut engine = ProcessEngine::new("true".into(), Vec::new()).unwrap();
        assert!(engine.start());
    }

    #[tokio::test]
    async fn second_start_reuses_the_engine() {
        let mut engine = ProcessEngine::new("true".into(), Vec::new()).unwrap();
        assert!(engine.start());
        assert!(engine.start());
    }

    #[tokio::test]
    async fn start_reports_false_for_missing_command() {
        let mut engine =
            ProcessEngine::new("bootcore-no-such-engine".into(), Vec::new()).unwrap();
        assert!(!engine.start());
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            ProcessEngine::new(String::new(), Vec::new()),
            Err(EngineError::NotConfigured)
        ));
    }
}
