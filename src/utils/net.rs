use std::net::Ipv4Addr;

use crate::domain::{BridgeError, RawAddress};

/// Format a raw platform address as dotted-decimal text.
///
/// Octets are emitted low byte first: `addr & 0xFF`, then `(addr >> 8) & 0xFF`,
/// and so on. Every `i32`, negative values included, yields a valid address.
pub fn format_address(addr: i32) -> String {
    RawAddress(addr).to_string()
}

/// Parse dotted-decimal text back into a raw address using the same byte order.
pub fn parse_address(text: &str) -> Result<RawAddress, BridgeError> {
    text.trim()
        .parse::<Ipv4Addr>()
        .map(RawAddress::from)
        .map_err(|e| BridgeError::InvalidAddress(format!("'{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_address(0), "0.0.0.0");
    }

    #[test]
    fn test_format_all_bits_set() {
        assert_eq!(format_address(-1), "255.255.255.255");
    }

    #[test]
    fn test_format_loopback() {
        assert_eq!(format_address(16777343), "127.0.0.1");
    }

    #[test]
    fn test_format_high_bit_set() {
        // 0xC0A8_00C0 little-endian: 192.0.168.192
        assert_eq!(format_address(0xC0A8_00C0_u32 as i32), "192.0.168.192");
        assert_eq!(format_address(i32::MIN), "0.0.0.128");
    }

    #[test]
    fn test_parse_loopback() {
        assert_eq!(parse_address("127.0.0.1").unwrap(), RawAddress(16777343));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_address("256.1.1.1"),
            Err(BridgeError::InvalidAddress(_))
        ));
        assert!(parse_address("10.0.0").is_err());
        assert!(parse_address("").is_err());
    }
}
