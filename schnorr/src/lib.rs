//! Schnorr signatures over a prime-order subgroup of `Z*_p`.
//!
//! This library implements the Schnorr signature scheme using:
//! - Domain parameters `(p, q, g)` from the [`group`] crate
//! - Any [`HashFunction`] for nonce derivation and the Fiat-Shamir challenge,
//!   typically [`poseidon::Poseidon`] over `p`
//! - Messages encoded as integers, i.e. field elements
//!
//! # Overview
//!
//! A signature on `msg` under `x` is `(s, h)` with `h = H(msg, g^k) mod q`
//! and `s = k - h * x mod q`. The verifier recomputes `g^s * y^h`, which
//! equals `g^k` exactly when the signature was produced with the private key
//! matching `y`.
//!
//! The nonce `k` is derived from the message and the private key, so signing
//! is deterministic and never draws randomness.
//!
//! # Example
//!
//! ```
//! use group::ParameterSet;
//! use num_bigint::BigUint;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use schnorr::{KeyPair, poseidon_for};
//!
//! let preset = ParameterSet::by_name("p64").expect("preset");
//! let params = preset.parameters().expect("parameters");
//! let hash = poseidon_for(&params, &preset.hash).expect("poseidon");
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let keys = KeyPair::generate(&params, &mut rng).expect("key generation failed");
//!
//! let message = BigUint::from(0xAAu8);
//! let signature = keys.sign(&params, &message, &hash).expect("signing failed");
//! assert!(keys.verifying_key().verify(&params, &message, &signature, &hash));
//! ```
//!
//! # Security Considerations
//!
//! - The nonce is only as secret as the private key and the hash
//! - Certify externally supplied parameters with [`group::DomainParameters::verify`]
//! - Arithmetic is not constant time

mod constants;
mod errors;
mod hash;
mod keys;
mod signatures;


pub use constants::HASH_WIDTH;
pub use errors::SchnorrError;
pub use hash::{HashFunction, poseidon_for};
pub use keys::{KeyPair, SigningKey, VerifyingKey};
pub use signatures::Signature;
