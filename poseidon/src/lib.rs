//! Poseidon permutation over a runtime prime field.
//!
//! The state has width 4 and the round function is the HADES
//! design: `R_F / 2` full rounds, `R_P` partial rounds with a single S-box,
//! then `R_F / 2` full rounds. Round constants come from the Grain LFSR and
//! the linear layer is a Cauchy MDS matrix, so an instance is fully
//! determined by its [`PoseidonConfig`].
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use poseidon::{Poseidon, PoseidonConfig};
//!
//! let config = PoseidonConfig::new(BigUint::from(199u32));
//! let poseidon = Poseidon::new(config).expect("valid config");
//!
//! let input = [1u32, 0, 2, 8].map(BigUint::from);
//! assert_eq!(poseidon.hash(&input), BigUint::from(42u32));
//! ```

mod config;
mod errors;
mod grain;
mod mds;
mod permutation;

pub use config::{
    smallest_alpha, PoseidonConfig, DEFAULT_FULL_ROUNDS, DEFAULT_PARTIAL_ROUNDS, WIDTH,
};
pub use errors::PoseidonError;
pub use grain::round_constants;
pub use mds::{cauchy_matrix, MdsMatrix};
pub use permutation::{Poseidon, MAX_MODULUS_BITS};
