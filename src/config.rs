use std::env;

use crate::api::channel::MethodChannel;
use crate::domain::{BridgeError, RawAddress};
use crate::services::{FixedAddressSource, PlatformAddressSource};
use crate::utils::net::parse_address;

pub const DEFAULT_LOG_FILTER: &str = "mobile_car_sim=info,rust_lib_mobile_car_sim=info";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Reported instead of querying the platform (DEVICE_IP_OVERRIDE)
    pub address_override: Option<RawAddress>,
}

impl Config {
    /// Read configuration, rejecting invalid values.
    pub fn try_from_env() -> Result<Self, BridgeError> {
        let address_override = match env::var("DEVICE_IP_OVERRIDE") {
            Ok(value) if !value.trim().is_empty() => Some(
                parse_address(&value)
                    .map_err(|e| BridgeError::Config(format!("DEVICE_IP_OVERRIDE: {}", e)))?,
            ),
            _ => None,
        };

        Ok(Self { address_override })
    }

    /// Read configuration, falling back to defaults for invalid values.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            tracing::warn!("{} (using defaults)", e);
            Self::default()
        })
    }

    /// Build the device IP channel this configuration describes.
    pub fn channel(&self) -> MethodChannel {
        match self.address_override {
            Some(raw) => {
                tracing::info!("Using fixed device address {}", raw);
                MethodChannel::new(FixedAddressSource(raw))
            }
            None => MethodChannel::new(PlatformAddressSource),
        }
    }
}
