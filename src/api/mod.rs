pub mod channel;
pub mod codec;
pub mod frb; // FFI API for flutter_rust_bridge

pub use channel::{CHANNEL_NAME, GET_DEVICE_IP_ADDRESS, MethodCall, MethodChannel, MethodResult};
