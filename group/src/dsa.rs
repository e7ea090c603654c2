//! DSA-style generation of domain parameters.
//!
//! Follows the probable-prime construction of FIPS 186-4 (A.1.1.2) with
//! SHA-256: `q` is derived from a random seed and `p` from successive hashes
//! of that seed. The seed and counter are kept so that the derivation can be
//! replayed later. The resulting triple satisfies exactly the same
//! [`DomainParameters::verify`] contract as the direct generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::errors::{CertificationFailure, GroupError};
use crate::generate::{generate_generator, GenerationConfig};
use crate::params::DomainParameters;
use crate::prime::PrimeProvider;

/// SHA-256 output length in bits.
const OUTLEN: u64 = 256;

/// Seed and counter from which a DSA-style parameter set was derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaCertificate {
    pub seed: Vec<u8>,
    pub counter: u64,
}

/// Certified parameters together with their derivation record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaParameters {
    pub parameters: DomainParameters,
    pub certificate: DsaCertificate,
}

/// Generator for `(L, N)`-sized parameter sets, `L = |p|` and `N = |q|`.
#[derive(Clone, Debug)]
pub struct DsaGenerator<P> {
    primes: P,
    config: GenerationConfig,
    len_p: u64,
    len_q: u64,
}

impl<P: PrimeProvider> DsaGenerator<P> {
    /// Requires `2 <= len_q <= 256` and `len_p > len_q`.
    pub fn new(primes: P, len_p: u64, len_q: u64) -> Result<Self, GroupError> {
        Self::with_config(primes, len_p, len_q, GenerationConfig::default())
    }

    pub fn with_config(
        primes: P,
        len_p: u64,
        len_q: u64,
        config: GenerationConfig,
    ) -> Result<Self, GroupError> {
        if len_q < 2 || len_q > OUTLEN || len_p <= len_q {
            return Err(GroupError::UnsupportedDsaSizes { len_p, len_q });
        }
        Ok(Self {
            primes,
            config,
            len_p,
            len_q,
        })
    }

    pub fn primes(&self) -> &P {
        &self.primes
    }

    fn seed_len(&self) -> usize {
        self.len_q.div_ceil(8) as usize
    }

    /// Runs the seeded search and returns certified parameters.
    pub fn generate(&mut self) -> Result<DsaParameters, GroupError> {
        for attempt in 1..=self.config.max_attempts {
            let seed_bits = self.seed_len() as u64 * 8;
            let seed = to_be_padded(&self.primes.random_bits(seed_bits), self.seed_len());

            let q = derive_q(&seed, self.len_q);
            if !self.primes.is_prime(&q) {
                continue;
            }
            debug!(attempt, "seed produced prime q");

            if let Some((p, counter)) = self.search_p(&seed, &q) {
                let g = generate_generator(&self.primes, &p, &q, &self.config)?;
                let parameters = DomainParameters::new(p, q, g);
                parameters.verify(&self.primes)?;
                info!(
                    len_p = self.len_p,
                    len_q = self.len_q,
                    counter,
                    "generated DSA-style domain parameters"
                );
                return Ok(DsaParameters {
                    parameters,
                    certificate: DsaCertificate { seed, counter },
                });
            }
        }

        Err(GroupError::AttemptsExhausted {
            target: "DSA seed",
            attempts: self.config.max_attempts,
        })
    }

    fn search_p(&self, seed: &[u8], q: &BigUint) -> Option<(BigUint, u64)> {
        let threshold = BigUint::one() << (self.len_p - 1);
        for counter in 0..4 * self.len_p {
            let p = derive_p(seed, q, self.len_p, counter);
            if p >= threshold && self.primes.is_prime(&p) {
                return Some((p, counter));
            }
        }
        None
    }

    /// Replays the derivation recorded in `certificate` and checks that it
    /// yields the `p` and `q` of `params`, on top of the generic
    /// certification.
    ///
    /// As during generation, `counter` must be the first one whose candidate
    /// is a prime of exactly `L` bits.
    pub fn validate_provenance(
        &self,
        params: &DomainParameters,
        certificate: &DsaCertificate,
    ) -> Result<(), GroupError> {
        params.verify(&self.primes)?;
        if certificate.seed.len() != self.seed_len() || certificate.counter >= 4 * self.len_p {
            return Err(CertificationFailure::ProvenanceMismatch.into());
        }
        let q = derive_q(&certificate.seed, self.len_q);
        if &q != params.q() {
            return Err(CertificationFailure::ProvenanceMismatch.into());
        }
        match self.search_p(&certificate.seed, &q) {
            Some((p, counter)) if &p == params.p() && counter == certificate.counter => Ok(()),
            _ => Err(CertificationFailure::ProvenanceMismatch.into()),
        }
    }
}

fn hash(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(data))
}

// q = 2^(N-1) + U + 1 - (U mod 2), U = H(seed) mod 2^(N-1).
fn derive_q(seed: &[u8], len_q: u64) -> BigUint {
    let top = BigUint::one() << (len_q - 1);
    let u = hash(seed) % &top;
    let parity = if u.bit(0) { BigUint::one() } else { BigUint::zero() };
    top + u + BigUint::one() - parity
}

fn derive_p(seed: &[u8], q: &BigUint, len_p: u64, counter: u64) -> BigUint {
    let n = len_p.div_ceil(OUTLEN) - 1;
    let b = len_p - 1 - n * OUTLEN;
    let seed_value = BigUint::from_bytes_be(seed);
    let modulus = BigUint::one() << (seed.len() as u64 * 8);
    let offset = 1 + counter * (n + 1);

    let mut w = BigUint::zero();
    for j in 0..=n {
        let block = (&seed_value + offset + j) % &modulus;
        let mut v = hash(&to_be_padded(&block, seed.len()));
        if j == n {
            v %= BigUint::one() << b;
        }
        w += v << (j * OUTLEN);
    }

    let x = w + (BigUint::one() << (len_p - 1));
    let c = &x % (q << 1u32);
    x + BigUint::one() - c
}

fn to_be_padded(n: &BigUint, len: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    if bytes.len() >= len {
        return bytes[bytes.len() - len..].to_vec();
    }
    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(&bytes);
    out
}
