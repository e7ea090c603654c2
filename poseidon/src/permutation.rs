//! The Poseidon permutation and its single-output hash.

use num_bigint::BigUint;
use tracing::debug;

use crate::config::{is_coprime, PoseidonConfig, WIDTH};
use crate::errors::PoseidonError;
use crate::grain::round_constants;
use crate::mds::{apply, cauchy_matrix, MdsMatrix};

/// Largest modulus size the Grain seed can encode.
pub const MAX_MODULUS_BITS: u64 = 4095;

const MAX_ROUNDS: usize = (1 << 10) - 1;

/// A Poseidon instance with precomputed constants.
#[derive(Clone, Debug)]
pub struct Poseidon {
    config: PoseidonConfig,
    alpha: BigUint,
    round_constants: Vec<BigUint>,
    mds: MdsMatrix,
}

impl Poseidon {
    /// Validates `config` and derives round constants and the MDS matrix.
    pub fn new(config: PoseidonConfig) -> Result<Self, PoseidonError> {
        validate(&config)?;
        let mds = cauchy_matrix(&config.modulus)?;
        let round_constants = round_constants(
            &config.modulus,
            WIDTH,
            config.full_rounds,
            config.partial_rounds,
        )?;
        debug!(
            bits = config.modulus.bits(),
            alpha = config.alpha,
            full_rounds = config.full_rounds,
            partial_rounds = config.partial_rounds,
            "instantiated poseidon"
        );
        Ok(Self {
            alpha: BigUint::from(config.alpha),
            config,
            round_constants,
            mds,
        })
    }

    /// Instance with the default parameters for `modulus`.
    pub fn with_modulus(modulus: BigUint) -> Result<Self, PoseidonError> {
        Self::new(PoseidonConfig::new(modulus))
    }

    #[inline]
    pub fn config(&self) -> &PoseidonConfig {
        &self.config
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.config.modulus
    }

    #[inline]
    pub fn round_constants(&self) -> &[BigUint] {
        &self.round_constants
    }

    #[inline]
    pub fn mds(&self) -> &MdsMatrix {
        &self.mds
    }

    /// Applies the permutation in place. Inputs need not be reduced.
    pub fn permute(&self, state: &mut [BigUint; WIDTH]) {
        let p = self.modulus();
        for lane in state.iter_mut() {
            *lane %= p;
        }

        let half_full = self.config.full_rounds / 2;
        let partial_end = half_full + self.config.partial_rounds;
        for (round, constants) in self.round_constants.chunks_exact(WIDTH).enumerate() {
            for (lane, c) in state.iter_mut().zip(constants) {
                *lane += c;
                *lane %= p;
            }
            if round < half_full || round >= partial_end {
                for lane in state.iter_mut() {
                    *lane = lane.modpow(&self.alpha, p);
                }
            } else {
                state[0] = state[0].modpow(&self.alpha, p);
            }
            apply(&self.mds, state, p);
        }
    }

    /// Permutes a copy of `input` and returns lane 1.
    pub fn hash(&self, input: &[BigUint; WIDTH]) -> BigUint {
        let mut state = input.clone();
        self.permute(&mut state);
        let [_, out, _, _] = state;
        out
    }
}

fn validate(config: &PoseidonConfig) -> Result<(), PoseidonError> {
    let p = &config.modulus;
    if !p.bit(0) || p <= &BigUint::from(3u8) {
        return Err(PoseidonError::InvalidModulus(p.clone()));
    }
    if p.bits() > MAX_MODULUS_BITS {
        return Err(PoseidonError::ModulusTooLarge(p.bits()));
    }
    if config.full_rounds == 0 || config.full_rounds % 2 != 0 {
        return Err(PoseidonError::InvalidFullRounds(config.full_rounds));
    }
    for rounds in [config.full_rounds, config.partial_rounds] {
        if rounds > MAX_ROUNDS {
            return Err(PoseidonError::TooManyRounds(rounds));
        }
    }
    if config.alpha < 3 || !is_coprime(config.alpha, &(p - 1u8)) {
        return Err(PoseidonError::InvalidAlpha {
            alpha: config.alpha,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: [u64; WIDTH]) -> [BigUint; WIDTH] {
        values.map(BigUint::from)
    }

    fn toy(full_rounds: usize, partial_rounds: usize) -> Poseidon {
        let config =
            PoseidonConfig::new(BigUint::from(199u32)).with_rounds(full_rounds, partial_rounds);
        Poseidon::new(config).expect("valid config")
    }

    #[test]
    fn test_toy_permutation() {
        let mut s = state([1, 0, 2, 8]);
        toy(8, 56).permute(&mut s);
        assert_eq!(s, state([135, 42, 189, 150]));

        let mut s = state([1, 0, 2, 8]);
        toy(2, 1).permute(&mut s);
        assert_eq!(s, state([92, 13, 185, 15]));

        let mut s = state([0, 0, 0, 0]);
        toy(2, 1).permute(&mut s);
        assert_eq!(s, state([7, 80, 170, 181]));
    }

    #[test]
    fn test_hash_returns_second_lane() {
        assert_eq!(toy(8, 56).hash(&state([1, 0, 2, 8])), BigUint::from(42u32));
        assert_eq!(toy(2, 1).hash(&state([1, 0, 2, 8])), BigUint::from(13u32));
    }

    #[test]
    fn test_inputs_are_reduced() {
        let poseidon = toy(2, 1);
        assert_eq!(
            poseidon.hash(&state([200, 199, 201, 207])),
            poseidon.hash(&state([1, 0, 2, 8]))
        );
    }

    #[test]
    fn test_32_bit_field() {
        let config = PoseidonConfig::new(BigUint::from(3552575077u64)).with_rounds(2, 1);
        let poseidon = Poseidon::new(config).expect("valid config");
        let mut s = state([1, 0, 2, 8]);
        poseidon.permute(&mut s);
        assert_eq!(
            s,
            state([298884370, 1725970220, 3501558145, 2188728436])
        );
    }

    #[test]
    fn test_default_instance() {
        let poseidon = Poseidon::with_modulus(BigUint::from(52813u32)).expect("valid config");
        assert_eq!(poseidon.round_constants().len(), 64 * WIDTH);
        let mut s = state([170, 41, 0, 0]);
        poseidon.permute(&mut s);
        assert_eq!(s, state([5964, 33589, 34927, 4264]));
    }

    #[test]
    fn test_rejects_invalid_configs() {
        let base = PoseidonConfig::new(BigUint::from(199u32));
        let cases = [
            (
                PoseidonConfig::new(BigUint::from(200u32)),
                PoseidonError::InvalidModulus(BigUint::from(200u32)),
            ),
            (
                PoseidonConfig::new(BigUint::from(3u32)),
                PoseidonError::InvalidModulus(BigUint::from(3u32)),
            ),
            (
                PoseidonConfig::new((BigUint::from(1u8) << 4096u32) + 1u8),
                PoseidonError::ModulusTooLarge(4097),
            ),
            (base.clone().with_rounds(0, 56), PoseidonError::InvalidFullRounds(0)),
            (base.clone().with_rounds(7, 56), PoseidonError::InvalidFullRounds(7)),
            (base.clone().with_rounds(8, 1024), PoseidonError::TooManyRounds(1024)),
            // 198 = 2 * 3^2 * 11.
            (base.clone().with_alpha(3), PoseidonError::InvalidAlpha { alpha: 3 }),
            (base.clone().with_alpha(1), PoseidonError::InvalidAlpha { alpha: 1 }),
        ];
        for (config, expected) in cases {
            assert_eq!(Poseidon::new(config).err(), Some(expected));
        }
    }
}
