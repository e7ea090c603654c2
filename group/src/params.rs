//! Domain parameters `(p, q, g)` and their certification.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{CertificationFailure, GroupError};
use crate::prime::PrimeProvider;

/// A prime-order subgroup of `Z*_p`.
///
/// `p` and `q` are prime, `q | p - 1` and `g` generates the subgroup of
/// order `q`. A value built with [`DomainParameters::new`] is not trusted
/// until [`DomainParameters::verify`] accepts it; values returned by the
/// generators have already been certified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DomainParameters {
    /// Wraps a triple without checking it.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Self {
        Self { p, q, g }
    }

    /// Field modulus.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Subgroup order.
    #[inline]
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Subgroup generator.
    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// `g^e mod p`.
    #[inline]
    pub fn pow_g(&self, e: &BigUint) -> BigUint {
        self.g.modpow(e, &self.p)
    }

    /// `base^e mod p`.
    #[inline]
    pub fn pow(&self, base: &BigUint, e: &BigUint) -> BigUint {
        base.modpow(e, &self.p)
    }

    /// `(a * b) mod p`.
    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// `true` when `1 < e < p` and `e^q = 1 (mod p)`, i.e. `e` lies in the
    /// order-`q` subgroup and is not the identity.
    pub fn is_subgroup_element(&self, e: &BigUint) -> bool {
        e > &BigUint::one() && e < &self.p && self.pow(e, &self.q).is_one()
    }

    /// Certifies the parameter set.
    ///
    /// Checks that `p` and `q` are prime, that `q | p - 1`, that `1 < g < p`
    /// and that `g^q = 1 (mod p)`. Because `q` is prime and `g != 1`, the last
    /// two checks pin the order of `g` to exactly `q`. The first failing
    /// condition is reported.
    pub fn verify<P: PrimeProvider + ?Sized>(&self, primes: &P) -> Result<(), GroupError> {
        match self.first_failure(primes) {
            None => {
                info!(
                    p_bits = self.p.bits(),
                    q_bits = self.q.bits(),
                    "domain parameters certified"
                );
                Ok(())
            }
            Some(failure) => {
                warn!(%failure, "domain parameters rejected");
                Err(failure.into())
            }
        }
    }

    /// Boolean form of [`DomainParameters::verify`].
    pub fn is_valid<P: PrimeProvider + ?Sized>(&self, primes: &P) -> bool {
        self.first_failure(primes).is_none()
    }

    fn first_failure<P: PrimeProvider + ?Sized>(&self, primes: &P) -> Option<CertificationFailure> {
        if !primes.is_prime(&self.p) {
            return Some(CertificationFailure::PNotPrime);
        }
        if !primes.is_prime(&self.q) {
            return Some(CertificationFailure::QNotPrime);
        }
        if !((&self.p - BigUint::one()) % &self.q).is_zero() {
            return Some(CertificationFailure::QDoesNotDividePMinusOne);
        }
        if self.g <= BigUint::one() || self.g >= self.p {
            return Some(CertificationFailure::GeneratorOutOfRange);
        }
        if !self.pow_g(&self.q).is_one() {
            return Some(CertificationFailure::GeneratorOrderMismatch);
        }
        None
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
pub fn parse_integer(literal: &str) -> Result<BigUint, GroupError> {
    let trimmed = literal.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| GroupError::InvalidLiteral(literal.to_string()))
}
