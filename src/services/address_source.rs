//! Address Source - where the raw device address comes from
//!
//! The WiFi query is a side-effecting platform call, so the channel takes it
//! as an injected capability. The formatter never touches the OS.

use std::net::IpAddr;

use local_ip_address::local_ip;

use crate::domain::{BridgeError, RawAddress};

/// Supplies the current raw device address.
pub trait AddressSource: Send + Sync {
    fn current_address(&self) -> Result<RawAddress, BridgeError>;
}

/// Queries the operating system for the local network address.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformAddressSource;

impl AddressSource for PlatformAddressSource {
    fn current_address(&self) -> Result<RawAddress, BridgeError> {
        from_ip(local_ip()?)
    }
}

fn from_ip(ip: IpAddr) -> Result<RawAddress, BridgeError> {
    match ip {
        IpAddr::V4(ip) => {
            tracing::debug!("Platform reported local address {}", ip);
            Ok(RawAddress::from(ip))
        }
        IpAddr::V6(ip) => Err(BridgeError::Unavailable(format!(
            "no IPv4 address, platform reported {}",
            ip
        ))),
    }
}

/// Always reports the same address.
#[derive(Debug, Clone, Copy)]
pub struct FixedAddressSource(pub RawAddress);

impl AddressSource for FixedAddressSource {
    fn current_address(&self) -> Result<RawAddress, BridgeError> {
        Ok(self.0)
    }
}

impl<F> AddressSource for F
where
    F: Fn() -> RawAddress + Send + Sync,
{
    fn current_address(&self) -> Result<RawAddress, BridgeError> {
        Ok(self())
    }
}
