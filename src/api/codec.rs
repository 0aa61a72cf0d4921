//! JSON method codec
//!
//! Envelope layout follows Flutter's `JSONMethodCodec`:
//! - call: `{"method": "...", "args": ...}`
//! - success: `[result]`
//! - error: `[code, message, details]`
//! - not implemented: empty reply

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::api::channel::MethodResult;
use crate::domain::BridgeError;

/// Error code used when an incoming message cannot be decoded
pub const BAD_CALL: &str = "bad_call";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl EncodedCall {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            args: Value::Null,
        }
    }
}

pub fn decode_call(message: &[u8]) -> Result<EncodedCall, BridgeError> {
    if message.is_empty() {
        return Err(BridgeError::Codec("empty method call".to_string()));
    }
    Ok(serde_json::from_slice(message)?)
}

pub fn encode_call(call: &EncodedCall) -> Result<Vec<u8>, BridgeError> {
    Ok(serde_json::to_vec(call)?)
}

pub fn encode_result(result: &MethodResult) -> Result<Vec<u8>, BridgeError> {
    let envelope = match result {
        MethodResult::Success(value) => json!([value]),
        MethodResult::Error { code, message } => json!([code, message, Value::Null]),
        MethodResult::NotImplemented => return Ok(Vec::new()),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a reply envelope produced by [`encode_result`].
pub fn decode_result(reply: &[u8]) -> Result<MethodResult, BridgeError> {
    if reply.is_empty() {
        return Ok(MethodResult::NotImplemented);
    }

    let envelope: Vec<Value> = serde_json::from_slice(reply)?;
    match envelope.as_slice() {
        [Value::String(value)] => Ok(MethodResult::Success(value.clone())),
        [Value::String(code), message, _] => Ok(MethodResult::Error {
            code: code.clone(),
            message: message.as_str().unwrap_or_default().to_string(),
        }),
        _ => Err(BridgeError::Codec(format!(
            "unexpected reply envelope with {} elements",
            envelope.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_call_without_args() {
        let call = decode_call(br#"{"method":"getDeviceIPAddress"}"#).unwrap();
        assert_eq!(call, EncodedCall::new("getDeviceIPAddress"));
    }

    #[test]
    fn test_decode_call_with_args() {
        let call = decode_call(br#"{"method":"ping","args":{"n":1}}"#).unwrap();
        assert_eq!(call.method, "ping");
        assert_eq!(call.args["n"], 1);
    }

    #[test]
    fn test_decode_call_malformed() {
        assert!(matches!(decode_call(b"not json"), Err(BridgeError::Codec(_))));
        assert!(matches!(decode_call(b""), Err(BridgeError::Codec(_))));
        assert!(decode_call(br#"{"args":null}"#).is_err());
    }

    #[test]
    fn test_encode_success() {
        let bytes = encode_result(&MethodResult::Success("10.0.0.2".to_string())).unwrap();
        assert_eq!(bytes, br#"["10.0.0.2"]"#.to_vec());
    }

    #[test]
    fn test_encode_error() {
        let bytes = encode_result(&MethodResult::Error {
            code: BAD_CALL.to_string(),
            message: "oops".to_string(),
        })
        .unwrap();
        assert_eq!(bytes, br#"["bad_call","oops",null]"#.to_vec());
    }

    #[test]
    fn test_not_implemented_is_empty_reply() {
        assert!(encode_result(&MethodResult::NotImplemented).unwrap().is_empty());
        assert_eq!(decode_result(&[]).unwrap(), MethodResult::NotImplemented);
    }

    #[test]
    fn test_decode_error_envelope() {
        let result = decode_result(br#"["bad_call","oops",null]"#).unwrap();
        assert_eq!(
            result,
            MethodResult::Error {
                code: "bad_call".to_string(),
                message: "oops".to_string()
            }
        );
    }
}
