//! Bridge client trait

use serde::Serialize;
use std::sync::Arc;
use tabbar_core::{BridgeMethod, TabBarError, TabBarResult};

use crate::{BridgeRequest, BridgeResponse};

/// Opaque call channel to native code
///
/// `call` receives the method name and JSON-encoded parameters and returns
/// a JSON-encoded [`BridgeResponse`]. An `Err` means the channel itself
/// failed; method-level failures come back as error responses.
pub trait BridgeClient: Send + Sync {
    fn call(&self, method: &str, params: &[u8]) -> TabBarResult<Vec<u8>>;
}

impl<C: BridgeClient + ?Sized> BridgeClient for Arc<C> {
    fn call(&self, method: &str, params: &[u8]) -> TabBarResult<Vec<u8>> {
        (**self).call(method, params)
    }
}

impl<C: BridgeClient + ?Sized> BridgeClient for Box<C> {
    fn call(&self, method: &str, params: &[u8]) -> TabBarResult<Vec<u8>> {
        (**self).call(method, params)
    }
}

impl<C: BridgeClient + ?Sized> BridgeClient for &C {
    fn call(&self, method: &str, params: &[u8]) -> TabBarResult<Vec<u8>> {
        (**self).call(method, params)
    }
}

/// Call `method` with `params` and return the response data
pub fn invoke<C, P>(client: &C, method: BridgeMethod, params: &P) -> TabBarResult<serde_json::Value>
where
    C: BridgeClient + ?Sized,
    P: Serialize,
{
    let request = BridgeRequest::from_typed(method, params)?;
    let params = serde_json::to_vec(&request.params)?;

    tracing::debug!(method = %method, "bridge call");
    let raw = client.call(&request.method, &params)?;

    let response = BridgeResponse::from_bytes(&raw).map_err(|err| {
        TabBarError::BridgeError(format!("malformed response to {method}: {err}"))
    })?;

    if !response.is_success() {
        tracing::warn!(
            method = %method,
            code = ?response.error_code,
            message = response.error_message.as_deref().unwrap_or_default(),
            "bridge call failed"
        );
    }

    response.into_result()
}
