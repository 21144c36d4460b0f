//! tabbar-transport - Bridge call envelopes and client trait
//!
//! This crate provides:
//! - [`BridgeRequest`] and [`BridgeResponse`] for message framing
//! - [`BridgeClient`], the opaque call channel to native code
//! - [`invoke`] for typed calls through any client

mod client;
mod envelope;

pub use client::{BridgeClient, invoke};
pub use envelope::{BridgeRequest, BridgeResponse, ResponseStatus};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BridgeClient, BridgeRequest, BridgeResponse, ResponseStatus, invoke};
}
