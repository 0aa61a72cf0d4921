pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod services;
pub mod utils;

pub use api::{MethodCall, MethodChannel, MethodResult};
pub use domain::{BridgeError, RawAddress};
pub use utils::net::{format_address, parse_address};
