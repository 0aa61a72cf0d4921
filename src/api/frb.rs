// FFI API module for flutter_rust_bridge
// Exposes the get_ip channel to Flutter without a platform-specific plugin.
//
// The channel is built once (from the environment) and shared by every call.

use flutter_rust_bridge::frb;
use std::sync::OnceLock;

use crate::api::channel::{MethodChannel, MethodResult};
use crate::config::Config;

static CHANNEL: OnceLock<MethodChannel> = OnceLock::new();

/// Get the channel, building it from the environment on first use
fn channel() -> &'static MethodChannel {
    CHANNEL.get_or_init(|| {
        let channel = Config::from_env().channel();
        tracing::info!("FFI: channel '{}' ready", channel.name());
        channel
    })
}

/// Install a panic hook to prevent crashes on iOS
/// This converts panics into logs instead of aborting
fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            let location = panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string());
            tracing::error!("FFI PANIC at {}: {}", location, message);
        }));
    });
}

// ============ FFI-Compatible Data Structures ============

/// Reply to a channel method call
#[frb(dart_metadata=("freezed"))]
pub enum FrbMethodResult {
    Success { value: String },
    Error { code: String, message: String },
    NotImplemented,
}

impl From<MethodResult> for FrbMethodResult {
    fn from(result: MethodResult) -> Self {
        match result {
            MethodResult::Success(value) => FrbMethodResult::Success { value },
            MethodResult::Error { code, message } => FrbMethodResult::Error { code, message },
            MethodResult::NotImplemented => FrbMethodResult::NotImplemented,
        }
    }
}

// ============ Initialization ============

/// Initialize logging and the device IP channel
/// Safe to call again after a hot restart
#[frb(sync)]
pub fn init_backend() -> String {
    install_panic_hook();
    crate::logging::init();

    if CHANNEL.get().is_some() {
        return "Already initialized".to_string();
    }

    channel();
    "Backend initialized successfully".to_string()
}

// ============ Health Check ============

/// Check if the FFI backend is initialized
/// Reports "OK" once the channel is built, whether by `init_backend` or by the first call
#[frb(sync)]
pub fn health_check() -> String {
    if CHANNEL.get().is_some() {
        "OK".to_string()
    } else {
        "NOT_INITIALIZED".to_string()
    }
}

/// Get the FFI backend version
#[frb(sync)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============ Device IP ============

/// Current device address in dotted-decimal form ("0.0.0.0" when offline)
#[frb(sync)]
pub fn get_device_ip_address() -> String {
    channel().device_ip_address()
}

/// Invoke a channel method by name
#[frb(sync)]
pub fn handle_method_call(method: String) -> FrbMethodResult {
    channel().handle(&method).into()
}

/// Invoke a channel method from a JSON call envelope, returning the encoded reply
#[frb(sync)]
pub fn handle_channel_message(message: Vec<u8>) -> Vec<u8> {
    channel().handle_message(&message)
}

/// Format a raw platform address without querying the device
#[frb(sync)]
pub fn format_ip_address(raw: i32) -> String {
    crate::utils::net::format_address(raw)
}
