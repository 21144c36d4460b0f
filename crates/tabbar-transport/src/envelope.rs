//! Request and response envelopes for bridge calls

use serde::{Deserialize, Serialize};
use tabbar_core::{BridgeMethod, TabBarError, TabBarResult};

/// A bridge call: `{method, params}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Method name (e.g. "TabBar.Configure")
    pub method: String,

    /// Method parameters (JSON object)
    #[serde(default)]
    pub params: serde_json::Value,
}

impl BridgeRequest {
    pub fn new(method: BridgeMethod, params: serde_json::Value) -> Self {
        Self {
            method: method.as_str().to_string(),
            params,
        }
    }

    /// Create from a method and serializable parameters
    pub fn from_typed<T: Serialize>(
        method: BridgeMethod,
        params: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(method, serde_json::to_value(params)?))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

/// Response status indicating success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Answer to a bridge call
///
/// Failures are structured responses rather than transport errors, so a
/// missing parameter never aborts the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub status: ResponseStatus,

    /// Result data (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Error code (on failure), see [`TabBarError::error_code`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,

    /// Error message (on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl BridgeResponse {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error_code: None,
            error_message: None,
        }
    }

    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            error_code: Some(code),
            error_message: Some(message.into()),
        }
    }

    /// Create an error response from a [`TabBarError`]
    pub fn from_error(err: &TabBarError) -> Self {
        Self::error(err.error_code(), err.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Convert into the call result, decoding error responses
    pub fn into_result(self) -> TabBarResult<serde_json::Value> {
        match self.status {
            ResponseStatus::Success => Ok(self.data.unwrap_or(serde_json::Value::Null)),
            ResponseStatus::Error => Err(TabBarError::from_code(
                self.error_code.unwrap_or(0),
                self.error_message.unwrap_or_default(),
            )),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
