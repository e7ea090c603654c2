//! Prime-order subgroups of the multiplicative group of integers modulo a prime.
//!
//! This crate provides the domain parameters `(p, q, g)` used by Schnorr
//! signatures, together with:
//! - a [`PrimeProvider`] abstraction and a Miller-Rabin implementation
//! - direct generation of `(p, q, g)` with `p = 1 (mod 2q)`
//! - DSA-style (FIPS 186-4) seeded generation with replayable provenance
//! - certification of externally supplied parameter sets
//! - named preset parameter sets from 8 to 2048 bits
//!
//! # Example
//!
//! ```
//! use group::{DomainParameterGenerator, MillerRabin};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let primes = MillerRabin::new(StdRng::seed_from_u64(7));
//! let mut generator = DomainParameterGenerator::new(primes);
//! let params = generator.generate(64, 32).expect("generation failed");
//! assert!(params.is_valid(generator.primes()));
//! ```

mod dsa;
mod errors;
mod generate;
mod params;
mod presets;
mod prime;
mod random;

pub use dsa::{DsaCertificate, DsaGenerator, DsaParameters};
pub use errors::{CertificationFailure, GroupError};
pub use generate::{
    generate_generator, DomainParameterGenerator, GenerationConfig, DEFAULT_MAX_ATTEMPTS,
};
pub use params::{parse_integer, DomainParameters};
pub use presets::{HashSettings, ParameterSet};
pub use prime::{is_probable_prime, MillerRabin, PrimeProvider, DEFAULT_ROUNDS};
pub use random::{random_below, random_bits, random_range};
