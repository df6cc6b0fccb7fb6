use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of envelope travelling over the shim channel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Request,
    Response,
    Event,
}

/// Error code answering a request the shim does not implement.
pub const NOT_IMPLEMENTED: i32 = -32601;

/// Error object attached to a failed response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CallError {
    pub code: i32,
    pub message: String,
}

impl CallError {
    /// Error for a method the shim does not handle.
    pub fn not_implemented(method: &str) -> Self {
        Self {
            code: NOT_IMPLEMENTED,
            message: format!("not implemented: {method}"),
        }
    }
}

/// Top level envelope exchanged between the host and the shim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Envelope {
    pub id: Option<String>,
    pub kind: Kind,
    pub method: Option<String>,
    pub params: Option<Value>,
    pub result: Option<Value>,
    pub error: Option<CallError>,
    pub topic: Option<String>,
    pub payload: Option<Value>,
}

impl Envelope {
    /// Request envelope carrying a method name and optional parameters.
    pub fn request(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Option<Value>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            kind: Kind::Request,
            method: Some(method.into()),
            params,
            result: None,
            error: None,
            topic: None,
            payload: None,
        }
    }

    /// Successful response answering the request with `id`.
    pub fn response(id: Option<String>, result: Value) -> Self {
        Self {
            id,
            kind: Kind::Response,
            method: None,
            params: None,
            result: Some(result),
            error: None,
            topic: None,
            payload: None,
        }
    }

    /// Failed response answering the request with `id`.
    pub fn failure(id: Option<String>, error: CallError) -> Self {
        Self {
            id,
            kind: Kind::Response,
            method: None,
            params: None,
            result: None,
            error: Some(error),
            topic: None,
            payload: None,
        }
    }

    /// Fire-and-forget event on a topic.
    pub fn event(topic: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            id: None,
            kind: Kind::Event,
            method: None,
            params: None,
            result: None,
            error: None,
            topic: Some(topic.into()),
            payload,
        }
    }
}

/// Report answering the `initialize` request.
///
/// `root` is serialized only when resolution found a development root, so
/// its absence on the wire means resolution failed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct InitReport {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}
