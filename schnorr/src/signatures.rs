//! Signature type, nonce derivation and challenge hashing.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::hash::HashFunction;

/// A Schnorr signature `(s, h)`, both reduced modulo `q`.
///
/// The commitment `r = g^k` is not stored; the verifier recomputes it as
/// `g^s * y^h` and checks that it hashes back to `h`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The response `s = k - h * x mod q`
    pub s: BigUint,
    /// The challenge `h = H(msg, r) mod q`
    pub h: BigUint,
}

impl Signature {
    pub fn new(s: BigUint, h: BigUint) -> Self {
        Self { s, h }
    }
}

/// Deterministic nonce `k = H([msg, x, 0, 0]) mod (q - 1) + 1`, always in
/// `[1, q - 1]`. Requires `q >= 2`.
pub(crate) fn derive_nonce<H: HashFunction + ?Sized>(
    q: &BigUint,
    msg: &BigUint,
    x: &BigUint,
    hash: &H,
) -> BigUint {
    let digest = hash.run(&[msg.clone(), x.clone(), BigUint::zero(), BigUint::zero()]);
    digest % (q - 1u8) + 1u8
}

/// Fiat-Shamir challenge `h = H([msg, r, 0, 0]) mod q`.
pub(crate) fn challenge<H: HashFunction + ?Sized>(
    q: &BigUint,
    msg: &BigUint,
    r: &BigUint,
    hash: &H,
) -> BigUint {
    hash.run(&[msg.clone(), r.clone(), BigUint::zero(), BigUint::zero()]) % q
}
