//! Bridge functions answering `TabBar.*` calls

use serde_json::{Value, json};
use std::sync::Arc;
use tabbar_core::{
    BarPayload, BridgeMethod, SetActiveParams, SetBadgeParams, TabBarError, TabBarResult,
};
use tabbar_transport::BridgeResponse;

use crate::TabBarManager;

/// Fallback when even the error response cannot be encoded
const ENCODE_FAILURE: &[u8] =
    br#"{"status":"error","error_code":9,"error_message":"failed to encode response"}"#;

/// Dispatches bridge calls to the [`TabBarManager`]
#[derive(Debug, Clone)]
pub struct TabBarFunctions {
    manager: Arc<TabBarManager>,
}

impl TabBarFunctions {
    pub fn new(manager: Arc<TabBarManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<TabBarManager> {
        &self.manager
    }

    /// Handle a raw call and always answer with an encoded [`BridgeResponse`]
    pub fn execute(&self, method: &str, params: &[u8]) -> Vec<u8> {
        let response = match self.dispatch(method, params) {
            Ok(data) => BridgeResponse::success(data),
            Err(err) => {
                tracing::debug!(method, code = err.error_code(), error = %err, "bridge call rejected");
                BridgeResponse::from_error(&err)
            }
        };

        response.to_bytes().unwrap_or_else(|err| {
            tracing::error!(method, error = %err, "failed to encode bridge response");
            ENCODE_FAILURE.to_vec()
        })
    }

    /// Handle a typed call
    pub fn call(&self, method: BridgeMethod, params: Value) -> TabBarResult<Value> {
        tracing::debug!(method = %method, "dispatching bridge call");

        match method {
            BridgeMethod::Configure => {
                let payload: BarPayload = serde_json::from_value(params)?;
                self.manager.configure(payload)?;
                Ok(json!({ "configured": true }))
            }
            BridgeMethod::Update => {
                let payload: BarPayload = serde_json::from_value(params)?;
                self.manager.update(payload)?;
                Ok(json!({ "updated": true }))
            }
            BridgeMethod::SetActive => {
                let params: SetActiveParams = serde_json::from_value(params)?;
                let id = params
                    .id
                    .ok_or_else(|| TabBarError::MissingParameter("id".to_string()))?;
                self.manager.set_active(&id);
                Ok(json!({ "active": id }))
            }
            BridgeMethod::SetBadge => {
                let params: SetBadgeParams = serde_json::from_value(params)?;
                let count = params.effective_count();
                let id = params
                    .id
                    .ok_or_else(|| TabBarError::MissingParameter("id".to_string()))?;
                self.manager.set_badge(&id, count);
                Ok(json!({ "id": id, "badge": params.count.unwrap_or(0) }))
            }
            BridgeMethod::Show => {
                self.manager.show();
                Ok(json!({ "visible": true }))
            }
            BridgeMethod::Hide => {
                self.manager.hide();
                Ok(json!({ "visible": false }))
            }
        }
    }

    fn dispatch(&self, method: &str, params: &[u8]) -> TabBarResult<Value> {
        let method: BridgeMethod = method.parse()?;
        self.call(method, Self::decode_params(params)?)
    }

    /// Empty or `null` parameters read as an empty object
    fn decode_params(params: &[u8]) -> TabBarResult<Value> {
        if params.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        match serde_json::from_slice(params)? {
            Value::Null => Ok(Value::Object(Default::default())),
            value => Ok(value),
        }
    }
}
