//! Method channel for the device IP capability
//!
//! The Flutter side invokes methods by name on the `get_ip` channel. Names are
//! mapped onto a closed set of calls; anything else is answered with
//! `NotImplemented` instead of an error.

use crate::api::codec;
use crate::domain::RawAddress;
use crate::services::AddressSource;

/// Name of the channel registered with the Flutter engine
pub const CHANNEL_NAME: &str = "get_ip";

/// The only method the channel implements
pub const GET_DEVICE_IP_ADDRESS: &str = "getDeviceIPAddress";

/// Calls understood by the channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    GetDeviceIpAddress,
    Unsupported(String),
}

impl MethodCall {
    /// Method names are matched exactly (case-sensitive).
    pub fn from_method(method: &str) -> Self {
        match method {
            GET_DEVICE_IP_ADDRESS => MethodCall::GetDeviceIpAddress,
            other => MethodCall::Unsupported(other.to_string()),
        }
    }

    pub fn method_name(&self) -> &str {
        match self {
            MethodCall::GetDeviceIpAddress => GET_DEVICE_IP_ADDRESS,
            MethodCall::Unsupported(name) => name,
        }
    }
}

/// Reply to a method call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodResult {
    Success(String),
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResult {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResult::NotImplemented)
    }
}

pub struct MethodChannel {
    name: String,
    source: Box<dyn AddressSource>,
}

impl MethodChannel {
    pub fn new(source: impl AddressSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn AddressSource>) -> Self {
        Self {
            name: CHANNEL_NAME.to_string(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle a call by method name
    pub fn handle(&self, method: &str) -> MethodResult {
        self.dispatch(MethodCall::from_method(method))
    }

    pub fn dispatch(&self, call: MethodCall) -> MethodResult {
        tracing::debug!("Channel '{}': {}", self.name, call.method_name());

        match call {
            MethodCall::GetDeviceIpAddress => MethodResult::Success(self.device_ip_address()),
            MethodCall::Unsupported(method) => {
                tracing::debug!("Channel '{}': '{}' not implemented", self.name, method);
                MethodResult::NotImplemented
            }
        }
    }

    /// Query the source once and format the result.
    ///
    /// A failed lookup formats as the unassigned address, which is what the
    /// platform reports when WiFi is disconnected.
    pub fn device_ip_address(&self) -> String {
        let raw = match self.source.current_address() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Channel '{}': {}", self.name, e);
                RawAddress::UNASSIGNED
            }
        };
        raw.to_string()
    }

    /// Handle an encoded method call and return the encoded reply.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        let result = match codec::decode_call(message) {
            Ok(call) => self.handle(&call.method),
            Err(e) => {
                tracing::warn!("Channel '{}': rejected message - {}", self.name, e);
                MethodResult::Error {
                    code: codec::BAD_CALL.to_string(),
                    message: e.to_string(),
                }
            }
        };

        codec::encode_result(&result).unwrap_or_else(|e| {
            tracing::error!("Channel '{}': failed to encode reply - {}", self.name, e);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BridgeError;
    use crate::services::FixedAddressSource;

    struct Disconnected;

    impl AddressSource for Disconnected {
        fn current_address(&self) -> Result<RawAddress, BridgeError> {
            Err(BridgeError::Unavailable("wifi off".to_string()))
        }
    }

    #[test]
    fn test_method_names_are_case_sensitive() {
        assert_eq!(
            MethodCall::from_method("getDeviceIPAddress"),
            MethodCall::GetDeviceIpAddress
        );
        assert_eq!(
            MethodCall::from_method("getdeviceipaddress"),
            MethodCall::Unsupported("getdeviceipaddress".to_string())
        );
    }

    #[test]
    fn test_get_device_ip_address() {
        let channel = MethodChannel::new(FixedAddressSource(RawAddress(16777343)));
        assert_eq!(
            channel.handle(GET_DEVICE_IP_ADDRESS),
            MethodResult::Success("127.0.0.1".to_string())
        );
    }

    #[test]
    fn test_unknown_method_not_implemented() {
        let channel = MethodChannel::new(FixedAddressSource(RawAddress(16777343)));
        assert!(channel.handle("getBatteryLevel").is_not_implemented());
        assert!(channel.handle("").is_not_implemented());
    }

    #[test]
    fn test_failed_lookup_formats_unassigned() {
        let channel = MethodChannel::new(Disconnected);
        assert_eq!(
            channel.handle(GET_DEVICE_IP_ADDRESS),
            MethodResult::Success("0.0.0.0".to_string())
        );
    }

    #[test]
    fn test_channel_name() {
        let channel = MethodChannel::new(Disconnected);
        assert_eq!(channel.name(), "get_ip");
    }
}
