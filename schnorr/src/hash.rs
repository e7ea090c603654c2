//! The hash capability used for nonce derivation and the Fiat-Shamir challenge.

use group::{DomainParameters, HashSettings};
use num_bigint::BigUint;
use poseidon::{Poseidon, PoseidonConfig, PoseidonError};

use crate::constants::HASH_WIDTH;

/// A function from four field elements to one.
///
/// The protocol only relies on this contract, so any implementation can be
/// substituted, including plain closures in tests.
pub trait HashFunction {
    fn run(&self, input: &[BigUint; HASH_WIDTH]) -> BigUint;
}

impl HashFunction for Poseidon {
    #[inline]
    fn run(&self, input: &[BigUint; HASH_WIDTH]) -> BigUint {
        self.hash(input)
    }
}

impl<F> HashFunction for F
where
    F: Fn(&[BigUint; HASH_WIDTH]) -> BigUint,
{
    #[inline]
    fn run(&self, input: &[BigUint; HASH_WIDTH]) -> BigUint {
        self(input)
    }
}

/// Poseidon over `p` configured with the given round settings.
pub fn poseidon_for(
    params: &DomainParameters,
    settings: &HashSettings,
) -> Result<Poseidon, PoseidonError> {
    let config = PoseidonConfig::new(params.p().clone())
        .with_security_level(settings.security_level)
        .with_alpha(settings.alpha)
        .with_rounds(settings.full_rounds, settings.partial_rounds);
    Poseidon::new(config)
}
