//! Scheme backend seam
//!
//! The view only ever talks to the backend through [`SchemeBackend`], so a
//! substitute can stand in for the real module.

use crate::types::Alerts;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Scheme backend unavailable: {0}")]
    Unavailable(String),
    #[error("Scheme backend call failed: {0}")]
    Failed(String),
}

/// Capabilities exposed by the external computational module
pub trait SchemeBackend: Send + Sync {
    /// Zero-argument greeting. Completes before returning.
    fn greet(&self) -> Result<(), BackendError>;
}

/// In-process backend. Greeting raises an alert for the host to show.
pub struct NativeBackend {
    name: String,
    alerts: Alerts,
}

impl NativeBackend {
    pub fn new(name: impl Into<String>, alerts: Alerts) -> Self {
        Self {
            name: name.into(),
            alerts,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl SchemeBackend for NativeBackend {
    fn greet(&self) -> Result<(), BackendError> {
        if self.name.trim().is_empty() {
            return Err(BackendError::Failed("empty greeting name".to_string()));
        }
        let message = self.greeting();
        info!(message = %message, "Backend greet");
        if !self.alerts.push(message) {
            return Err(BackendError::Unavailable("alert queue closed".to_string()));
        }
        Ok(())
    }
}
