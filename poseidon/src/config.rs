//! Instance parameters.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// State width of the permutation.
pub const WIDTH: usize = 4;

/// Full rounds used by [`PoseidonConfig::new`].
pub const DEFAULT_FULL_ROUNDS: usize = 8;

/// Partial rounds used by [`PoseidonConfig::new`].
pub const DEFAULT_PARTIAL_ROUNDS: usize = 56;

/// Field and round parameters of a Poseidon instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseidonConfig {
    pub modulus: BigUint,
    /// Informational; constants depend only on the modulus size and rounds.
    pub security_level: u32,
    pub alpha: u32,
    pub full_rounds: usize,
    pub partial_rounds: usize,
}

impl PoseidonConfig {
    /// Defaults for `modulus`: 8 full and 56 partial rounds, security level
    /// equal to the bit length and the smallest valid `alpha`.
    pub fn new(modulus: BigUint) -> Self {
        let alpha = smallest_alpha(&modulus);
        let security_level = u32::try_from(modulus.bits()).unwrap_or(u32::MAX);
        Self {
            modulus,
            security_level,
            alpha,
            full_rounds: DEFAULT_FULL_ROUNDS,
            partial_rounds: DEFAULT_PARTIAL_ROUNDS,
        }
    }

    pub fn with_rounds(mut self, full_rounds: usize, partial_rounds: usize) -> Self {
        self.full_rounds = full_rounds;
        self.partial_rounds = partial_rounds;
        self
    }

    pub fn with_alpha(mut self, alpha: u32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_security_level(mut self, security_level: u32) -> Self {
        self.security_level = security_level;
        self
    }

    #[inline]
    pub fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }
}

/// Smallest odd `alpha >= 3` with `gcd(alpha, p - 1) = 1`.
pub fn smallest_alpha(modulus: &BigUint) -> u32 {
    let order = if modulus > &BigUint::one() {
        modulus - 1u8
    } else {
        BigUint::one()
    };
    let mut alpha = 3u32;
    while !is_coprime(alpha, &order) {
        alpha += 2;
    }
    alpha
}

pub(crate) fn is_coprime(alpha: u32, order: &BigUint) -> bool {
    BigUint::from(alpha).gcd(order).is_one()
}
