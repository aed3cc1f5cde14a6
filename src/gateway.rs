// Native gateway seam: the bridge primitive the proxy forwards to

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced at the bridge boundary
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Failure reported by the native side, forwarded verbatim
    #[error("native error: {0}")]
    Native(String),

    /// The host end of the bridge went away before answering
    #[error("bridge closed before a reply arrived")]
    BridgeClosed,
}

/// Host-supplied primitive that dispatches a named operation to platform
/// code and resolves with its result. Exactly one outcome per invocation.
#[async_trait]
pub trait NativeGateway: Send + Sync {
    async fn invoke(
        &self,
        target: &str,
        operation: &str,
        args: Vec<Value>,
    ) -> Result<Value, GatewayError>;
}
