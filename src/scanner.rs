// Call surface for the local barcode scanner bridge

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::gateway::{GatewayError, NativeGateway};

/// Bridge service name the native side registers under.
pub const SERVICE: &str = "LocalBarcodeScanner";

/// The fixed set of actions the native side understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Scan,
    Stop,
    ScanBle,
    Disconnect,
    GetBatteryLevel,
}

impl Operation {
    /// Wire name sent to the bridge.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Scan => "scan",
            Operation::Stop => "stop",
            Operation::ScanBle => "scanBle",
            Operation::Disconnect => "disconnect",
            Operation::GetBatteryLevel => "getBatteryLevel",
        }
    }
}

/// Typed proxy over the native scanner plugin. Each method packages its
/// positional argument list and forwards it through the gateway exactly
/// once; payloads pass through untouched.
pub struct LocalBarcodeScanner {
    gateway: Arc<dyn NativeGateway>,
}

impl LocalBarcodeScanner {
    pub fn new(gateway: Arc<dyn NativeGateway>) -> Self {
        LocalBarcodeScanner { gateway }
    }

    /// Initialize the scanner. With a device identifier (MAC address or
    /// advertised name) the native side connects the R6 BLE reader;
    /// without one it opens the built-in PDA engine.
    pub async fn init_scanner(&self, device: Option<&str>) -> Result<Value, GatewayError> {
        let args = match device {
            Some(id) => vec![Value::from(id)],
            None => Vec::new(),
        };
        self.invoke(Operation::Initialize, args).await
    }

    /// Trigger a scan. The native side applies its own 5000 ms default
    /// when no timeout is supplied.
    pub async fn scan_barcode(&self, timeout: Option<Duration>) -> Result<Value, GatewayError> {
        let args = match timeout {
            Some(t) => vec![Value::from(t.as_millis() as u64)],
            None => Vec::new(),
        };
        self.invoke(Operation::Scan, args).await
    }

    pub async fn stop_scanner(&self) -> Result<Value, GatewayError> {
        self.invoke(Operation::Stop, Vec::new()).await
    }

    /// Discover nearby R6 readers over BLE.
    pub async fn scan_ble(&self) -> Result<Value, GatewayError> {
        self.invoke(Operation::ScanBle, Vec::new()).await
    }

    pub async fn disconnect(&self) -> Result<Value, GatewayError> {
        self.invoke(Operation::Disconnect, Vec::new()).await
    }

    pub async fn get_battery_level(&self) -> Result<Value, GatewayError> {
        self.invoke(Operation::GetBatteryLevel, Vec::new()).await
    }

    async fn invoke(&self, op: Operation, args: Vec<Value>) -> Result<Value, GatewayError> {
        debug!("forwarding {} with {} arg(s)", op.name(), args.len());
        self.gateway.invoke(SERVICE, op.name(), args).await
    }
}
