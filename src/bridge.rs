// In-process channel bridge: ships invocations to a host task

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::gateway::{GatewayError, NativeGateway};

/// One forwarded invocation, waiting for the host to answer.
#[derive(Debug)]
pub struct BridgeRequest {
    pub target: String,
    pub operation: String,
    pub args: Vec<Value>,
    respond_to: oneshot::Sender<Result<Value, GatewayError>>,
}

impl BridgeRequest {
    /// Deliver the outcome to the waiting caller. A caller that already
    /// dropped its invoke future just loses the reply.
    pub fn respond(self, reply: Result<Value, GatewayError>) {
        if self.respond_to.send(reply).is_err() {
            debug!("caller gone before reply to {}", self.operation);
        }
    }
}

/// Gateway half of an in-process bridge. The host drains the paired
/// receiver and answers each request; nothing here touches hardware.
#[derive(Clone)]
pub struct ChannelGateway {
    tx: mpsc::Sender<BridgeRequest>,
}

/// Create a connected gateway/receiver pair.
pub fn channel(capacity: usize) -> (ChannelGateway, mpsc::Receiver<BridgeRequest>) {
    let (tx, rx) = mpsc::channel(capacity);
    (ChannelGateway { tx }, rx)
}

#[async_trait]
impl NativeGateway for ChannelGateway {
    async fn invoke(
        &self,
        target: &str,
        operation: &str,
        args: Vec<Value>,
    ) -> Result<Value, GatewayError> {
        let (respond_to, reply) = oneshot::channel();
        let request = BridgeRequest {
            target: target.to_string(),
            operation: operation.to_string(),
            args,
            respond_to,
        };
        self.tx
            .send(request)
            .await
            .map_err(|_| GatewayError::BridgeClosed)?;
        reply.await.map_err(|_| GatewayError::BridgeClosed)?
    }
}
