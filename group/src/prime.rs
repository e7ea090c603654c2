//! Primality testing and random prime sampling.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use rand::Rng;

use crate::errors::GroupError;
use crate::random;

/// Miller-Rabin rounds used by [`MillerRabin::new`].
pub const DEFAULT_ROUNDS: usize = 40;

const SMALL_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Source of primality decisions and random primes.
///
/// Parameter generation and certification only rely on this contract, so any
/// conforming implementation can be swapped in.
pub trait PrimeProvider {
    /// Returns `true` if `n` is (probably) prime.
    fn is_prime(&self, n: &BigUint) -> bool;

    /// Samples an integer of exactly `bits` bits with the top bit set.
    fn random_bits(&mut self, bits: u64) -> BigUint;

    /// Samples a prime of exactly `bits` bits.
    ///
    /// Fails with [`GroupError::PrimeTooSmall`] when `bits < 2`.
    fn random_prime(&mut self, bits: u64) -> Result<BigUint, GroupError> {
        if bits < 2 {
            return Err(GroupError::PrimeTooSmall(bits));
        }
        loop {
            let mut candidate = self.random_bits(bits);
            if bits > 2 {
                candidate.set_bit(0, true);
            }
            if self.is_prime(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

/// Miller-Rabin backed [`PrimeProvider`].
///
/// Primality decisions come from the `miller_rabin` crate; the RNG only
/// feeds sampling.
#[derive(Clone, Debug)]
pub struct MillerRabin<R> {
    rng: R,
    rounds: usize,
}

impl<R: Rng> MillerRabin<R> {
    pub fn new(rng: R) -> Self {
        Self::with_rounds(rng, DEFAULT_ROUNDS)
    }

    pub fn with_rounds(rng: R, rounds: usize) -> Self {
        Self { rng, rounds }
    }
}

impl<R: Rng> PrimeProvider for MillerRabin<R> {
    fn is_prime(&self, n: &BigUint) -> bool {
        is_probable_prime(n, self.rounds)
    }

    fn random_bits(&mut self, bits: u64) -> BigUint {
        random::random_bits(&mut self.rng, bits)
    }
}

/// Trial division by small primes followed by `rounds` Miller-Rabin rounds.
///
/// Candidates that survive trial division go to [`miller_rabin::is_prime`],
/// which draws its own random witnesses.
pub fn is_probable_prime(n: &BigUint, rounds: usize) -> bool {
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }
    for &p in SMALL_PRIMES {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }
    miller_rabin::is_prime(n, rounds)
}
