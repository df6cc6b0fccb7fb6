use std::path::{Path, PathBuf};

use boot_api::{CallError, Envelope};
use serde_json::{json, Value};
use tracing::debug;

use crate::engine::Engine;

/// Handles named requests from the host.
///
/// Owns the injected engine and the optional resolved root for its whole
/// lifetime; both survive across requests.
pub struct Dispatcher<E> {
    engine: E,
    root: Option<PathBuf>,
}

impl<E: Engine> Dispatcher<E> {
    pub fn new(engine: E, root: Option<PathBuf>) -> Self {
        Self { engine, root }
    }

    /// Resolved development root reported to the host, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Handle a named request, producing either a result value or the
    /// error for the response envelope.
    pub fn handle(&mut self, method: &str) -> Result<Value, CallError> {
        match method {
            "initialize" => {
                let ok = self.engine.start();
                let mut result = json!({ "ok": ok });
                if let Some(root) = &self.root {
                    result["root"] = Value::String(root.display().to_string());
                }
                Ok(result)
            }
            other => Err(CallError::not_implemented(other)),
        }
    }

    /// Answer one request envelope, echoing its id so the host can match
    /// the response.
    pub fn dispatch(&mut self, request: &Envelope) -> Envelope {
        let method = request.method.as_deref().unwrap_or_default();
        debug!("dispatching {method}");
        match self.handle(method) {
            Ok(result) => Envelope::response(request.id.clone(), result),
            Err(err) => Envelope::failure(request.id.clone(), err),
        }
    }
}
