//! Constants used in the Schnorr signature scheme implementation.

/// Number of field elements consumed by one [`crate::HashFunction`] call.
///
/// Nonce derivation hashes `[msg, x, 0, 0]` and the challenge hashes
/// `[msg, r, 0, 0]`; the trailing lanes are zero padding.
pub const HASH_WIDTH: usize = poseidon::WIDTH;
