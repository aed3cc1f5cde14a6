// Local barcode scanner bridge
// Typed call surface over the host's native scanner plugin

pub mod bridge;
pub mod config;
pub mod gateway;
pub mod scanner;

pub use bridge::{channel, BridgeRequest, ChannelGateway};
pub use config::{load_config, ConfigError, ScannerConfig};
pub use gateway::{GatewayError, NativeGateway};
pub use scanner::{LocalBarcodeScanner, Operation, SERVICE};
