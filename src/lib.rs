pub use crate::crypto::sha2::{sha256, Sha256};

#[macro_use]
pub mod macros;
pub mod util;

pub mod hash_result;

// SHA-256 digest engine
pub mod crypto;

pub mod driver;

#[cfg(test)]
mod test;
