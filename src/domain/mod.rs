//! Domain layer - Pure abstractions
//!
//! No FFI or platform dependencies here: the raw address type and the
//! bridge error type.

pub mod address;
pub mod errors;

pub use address::RawAddress;
pub use errors::BridgeError;
