//! Hashing and addressing primitives

pub mod address;
pub mod hash;

pub use address::{Address, AddressParseError, ADDRESS_SIZE};
pub use hash::{Hash, HashParseError, HASH_SIZE};
