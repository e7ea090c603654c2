//! Direct generation of Schnorr domain parameters.
//!
//! `q` is drawn as a random prime of the requested size, then `p` is searched
//! among integers congruent to `1 mod 2q`, which makes `p` odd and guarantees
//! an order-`q` subgroup of `Z*_p` once `p` is prime.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::GroupError;
use crate::params::DomainParameters;
use crate::prime::PrimeProvider;

/// Attempt cap used by [`GenerationConfig::default`].
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;

/// Bounds for the retry loops of parameter generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of candidates tried by any single search (prime `p`,
    /// DSA seeds, generator bases) before giving up.
    pub max_attempts: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generates and certifies `(p, q, g)` using a [`PrimeProvider`].
#[derive(Clone, Debug)]
pub struct DomainParameterGenerator<P> {
    primes: P,
    config: GenerationConfig,
}

impl<P: PrimeProvider> DomainParameterGenerator<P> {
    pub fn new(primes: P) -> Self {
        Self::with_config(primes, GenerationConfig::default())
    }

    pub fn with_config(primes: P, config: GenerationConfig) -> Self {
        Self { primes, config }
    }

    pub fn primes(&self) -> &P {
        &self.primes
    }

    /// Generates the primes `p` and `q` with `p = 1 (mod 2q)`.
    ///
    /// Requires `len_p > len_q >= 2`. Every retry draws a fresh `len_p`-bit
    /// candidate `X` and maps it to `X - (X mod 2q) + 1`.
    pub fn generate_pq(
        &mut self,
        len_p: u64,
        len_q: u64,
    ) -> Result<(BigUint, BigUint), GroupError> {
        if len_p <= len_q || len_q < 2 {
            return Err(GroupError::InvalidBitLengths { len_p, len_q });
        }

        debug!(len_q, "sampling prime q");
        let q = self.primes.random_prime(len_q)?;
        let two_q = &q << 1u32;

        debug!(len_p, "searching for prime p = 1 mod 2q");
        for attempt in 1..=self.config.max_attempts {
            let x = self.primes.random_bits(len_p);
            let p = &x - (&x % &two_q) + BigUint::one();
            if self.primes.is_prime(&p) {
                debug!(attempt, "found prime p");
                return Ok((p, q));
            }
        }

        Err(GroupError::AttemptsExhausted {
            target: "prime p",
            attempts: self.config.max_attempts,
        })
    }

    /// Generates a complete, certified parameter set.
    pub fn generate(&mut self, len_p: u64, len_q: u64) -> Result<DomainParameters, GroupError> {
        let (p, q) = self.generate_pq(len_p, len_q)?;
        let g = generate_generator(&self.primes, &p, &q, &self.config)?;
        let params = DomainParameters::new(p, q, g);
        params.verify(&self.primes)?;
        info!(len_p, len_q, "generated domain parameters");
        Ok(params)
    }
}

/// Finds a generator of the order-`q` subgroup of `Z*_p`.
///
/// Tries bases `h = 2, 3, ...` and returns the first `h^((p-1)/q) mod p`
/// that is not 1. Any such element has order exactly `q` since `q` is prime.
/// `p` and `q` must be prime with `q | p - 1`.
pub fn generate_generator<P: PrimeProvider + ?Sized>(
    primes: &P,
    p: &BigUint,
    q: &BigUint,
    config: &GenerationConfig,
) -> Result<BigUint, GroupError> {
    if !primes.is_prime(p) {
        return Err(GroupError::NotPrime("p"));
    }
    if !primes.is_prime(q) {
        return Err(GroupError::NotPrime("q"));
    }
    let p_minus_one = p - BigUint::one();
    if !(&p_minus_one % q).is_zero() {
        return Err(GroupError::OrderDoesNotDivide);
    }

    let exponent = &p_minus_one / q;
    let mut h = BigUint::from(2u8);
    let mut attempts = 0;
    while &h < p && attempts < config.max_attempts {
        let g = h.modpow(&exponent, p);
        if g > BigUint::one() {
            debug!(%h, "found subgroup generator");
            return Ok(g);
        }
        h += 1u8;
        attempts += 1;
    }

    Err(GroupError::AttemptsExhausted {
        target: "subgroup generator",
        attempts,
    })
}
