//! Services Layer
//!
//! Platform-facing capabilities. Called through the method channel, which is
//! in turn reached via FFI or the desktop binary.

pub mod address_source;

// Re-export for convenience
pub use address_source::{AddressSource, FixedAddressSource, PlatformAddressSource};
