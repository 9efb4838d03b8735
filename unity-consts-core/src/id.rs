//! Deterministic member ids
//!
//! Ids back the generated enum values, so they must not change between runs or
//! machines. The id is the MD5 digest of the name, read as a big-endian
//! integer and reduced below 100 000 000 so it fits a signed 32-bit C# enum.

use md5::{Digest, Md5};

/// Upper bound (exclusive) of generated ids
pub const ID_MODULUS: u128 = 100_000_000;

/// Compute the id of a normalized name.
///
/// Distinct names may share an id; collisions are not detected here.
pub fn id_for(name: &str) -> u32 {
    let digest = Md5::digest(name.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    let value = u128::from_be_bytes(bytes);
    // Always below ID_MODULUS, which fits in u32
    (value % ID_MODULUS) as u32
}
