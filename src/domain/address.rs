//! Raw device address as reported by the platform WiFi query.

use std::fmt;
use std::net::Ipv4Addr;

/// 32-bit IPv4 address, least significant byte first.
///
/// The byte order is fixed: the first octet of the dotted form is the low
/// byte of the integer. It is never inferred at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawAddress(pub i32);

impl RawAddress {
    /// Address reported when the device has no WiFi connection.
    pub const UNASSIGNED: RawAddress = RawAddress(0);

    pub fn new(value: i32) -> Self {
        RawAddress(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// The four octets in dotted order.
    pub fn octets(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub fn from_octets(octets: [u8; 4]) -> Self {
        RawAddress(i32::from_le_bytes(octets))
    }
}

impl From<i32> for RawAddress {
    fn from(value: i32) -> Self {
        RawAddress(value)
    }
}

impl From<Ipv4Addr> for RawAddress {
    fn from(ip: Ipv4Addr) -> Self {
        RawAddress::from_octets(ip.octets())
    }
}

impl From<RawAddress> for Ipv4Addr {
    fn from(raw: RawAddress) -> Self {
        Ipv4Addr::from(raw.octets())
    }
}

impl fmt::Display for RawAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octets_low_byte_first() {
        assert_eq!(RawAddress(0x0100_007F).octets(), [127, 0, 0, 1]);
    }

    #[test]
    fn test_ipv4_conversion_keeps_dotted_order() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        let raw = RawAddress::from(ip);
        assert_eq!(raw.octets(), [192, 168, 1, 42]);
        assert_eq!(Ipv4Addr::from(raw), ip);
    }

    #[test]
    fn test_unassigned_displays_zero_address() {
        assert_eq!(RawAddress::UNASSIGNED.to_string(), "0.0.0.0");
    }
}
