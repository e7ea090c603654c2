//! Error types for Poseidon instantiation.

use num_bigint::BigUint;
use thiserror::Error;

/// Reasons a [`crate::PoseidonConfig`] cannot be instantiated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseidonError {
    /// The modulus must be an odd prime greater than 3.
    #[error("modulus {0} must be odd and greater than 3")]
    InvalidModulus(BigUint),

    /// The constant generator encodes the field size in 12 bits.
    #[error("modulus of {0} bits exceeds the supported 4095")]
    ModulusTooLarge(u64),

    /// Full rounds are split evenly around the partial rounds.
    #[error("full rounds must be even and non-zero, got {0}")]
    InvalidFullRounds(usize),

    /// Round counts are encoded in 10 bits each.
    #[error("round count {0} does not fit in 10 bits")]
    TooManyRounds(usize),

    /// `x^alpha` must be a permutation of the field.
    #[error("alpha {alpha} is not coprime to p - 1 or is below 3")]
    InvalidAlpha { alpha: u32 },

    /// The Cauchy matrix has a zero denominator modulo `p`.
    #[error("MDS matrix is not invertible modulo {0}")]
    SingularMds(BigUint),
}
