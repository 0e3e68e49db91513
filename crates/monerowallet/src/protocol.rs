//! JSON-RPC envelopes exchanged with the wallet daemon

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const JSONRPC_VERSION: &str = "2.0";

/// The wallet daemon ignores the id, so every request carries the same one.
pub const REQUEST_ID: &str = "0";

/// Message the daemon sends back for an unknown method.
pub const METHOD_NOT_FOUND: &str = "Method not found";

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    jsonrpc: String,
    id: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: REQUEST_ID.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// Error object reported by the daemon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// Response envelope handed back to callers.
///
/// `status` mirrors the HTTP status code of the exchange. When the daemon does
/// not put one in the body (or sends null), the client fills it in from the
/// HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub status: i64,
    #[serde(default = "empty_object")]
    pub result: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RemoteError>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Response {
    /// Parse a response body, taking `status` from the body when present and
    /// from `http_status` otherwise. Anything but a JSON object is rejected.
    pub fn from_body(body: &str, http_status: u16) -> serde_json::Result<Self> {
        let mut map: serde_json::Map<String, Value> = serde_json::from_str(body)?;
        let status = map.entry("status").or_insert(Value::Null);
        if status.is_null() {
            *status = Value::from(http_status);
        }
        serde_json::from_value(Value::Object(map))
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn into_result(self) -> Value {
        self.result
    }

    /// Deserialize `result` into one of the typed views in [`crate::types`].
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.result)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
