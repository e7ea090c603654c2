//! Round constant generation with the Grain LFSR.
//!
//! The 80-bit register is seeded from the instance shape, so every
//! `(bits(p), t, R_F, R_P)` combination has its own constant stream.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::PoseidonError;

const REGISTER_BITS: u32 = 80;
const REGISTER_MASK: u128 = (1u128 << REGISTER_BITS) - 1;
const WARMUP: usize = 160;

/// Self-shrinking Grain LFSR.
#[derive(Clone, Debug)]
pub(crate) struct Grain {
    state: u128,
}

impl Grain {
    pub(crate) fn new(
        field_bits: u64,
        width: usize,
        full_rounds: usize,
        partial_rounds: usize,
    ) -> Self {
        let fields: [(u128, u32); 7] = [
            (1, 2), // prime field
            (1, 4), // x^alpha S-box
            (field_bits as u128, 12),
            (width as u128, 12),
            (full_rounds as u128, 10),
            (partial_rounds as u128, 10),
            ((1 << 30) - 1, 30),
        ];
        let mut state = 0u128;
        for (value, bits) in fields {
            state = (state << bits) | (value & ((1 << bits) - 1));
        }

        let mut grain = Self { state };
        for _ in 0..WARMUP {
            grain.clock();
        }
        grain
    }

    // Bit i counts from the oldest end of the register.
    #[inline]
    fn tap(&self, i: u32) -> u128 {
        (self.state >> (REGISTER_BITS - 1 - i)) & 1
    }

    fn clock(&mut self) -> bool {
        let feedback =
            self.tap(62) ^ self.tap(51) ^ self.tap(38) ^ self.tap(23) ^ self.tap(13) ^ self.tap(0);
        self.state = ((self.state << 1) | feedback) & REGISTER_MASK;
        feedback == 1
    }

    fn next_bit(&mut self) -> bool {
        loop {
            let keep = self.clock();
            let bit = self.clock();
            if keep {
                return bit;
            }
        }
    }

    /// Next `bits`-bit value below `modulus`, by rejection.
    pub(crate) fn next_field_element(&mut self, modulus: &BigUint, bits: u64) -> BigUint {
        loop {
            let mut candidate = BigUint::zero();
            for _ in 0..bits {
                candidate <<= 1u32;
                if self.next_bit() {
                    candidate.set_bit(0, true);
                }
            }
            if &candidate < modulus {
                return candidate;
            }
        }
    }
}

/// `(R_F + R_P) * width` constants, row-major by round.
///
/// Fails for `modulus < 2`, where no field element can be sampled.
pub fn round_constants(
    modulus: &BigUint,
    width: usize,
    full_rounds: usize,
    partial_rounds: usize,
) -> Result<Vec<BigUint>, PoseidonError> {
    if modulus <= &BigUint::one() {
        return Err(PoseidonError::InvalidModulus(modulus.clone()));
    }
    let bits = modulus.bits();
    let mut grain = Grain::new(bits, width, full_rounds, partial_rounds);
    Ok((0..(full_rounds + partial_rounds) * width)
        .map(|_| grain.next_field_element(modulus, bits))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(constants: &[BigUint]) -> Vec<u64> {
        constants
            .iter()
            .map(|c| u64::try_from(c).expect("small constant"))
            .collect()
    }

    #[test]
    fn test_toy_field_constants() {
        let constants = round_constants(&BigUint::from(199u32), 4, 2, 1).expect("constants");
        assert_eq!(
            values(&constants),
            vec![99, 97, 197, 119, 124, 43, 21, 146, 191, 195, 82, 71]
        );
    }

    #[test]
    fn test_constants_depend_on_round_counts() {
        let constants = round_constants(&BigUint::from(199u32), 4, 8, 56).expect("constants");
        assert_eq!(constants.len(), 256);
        assert_eq!(
            values(&constants[..10]),
            vec![36, 84, 41, 31, 185, 109, 188, 195, 100, 80]
        );
    }

    #[test]
    fn test_32_bit_field_constants() {
        let p = BigUint::from(3552575077u64);
        assert_eq!(
            values(&round_constants(&p, 4, 2, 1).expect("constants")[..2]),
            vec![110929376, 2029821953]
        );
        assert_eq!(
            values(&round_constants(&p, 4, 8, 56).expect("constants")[..2]),
            vec![3099850505, 3179516854]
        );
        let constants = round_constants(&p, 4, 8, 56).expect("constants");
        assert!(constants.iter().all(|c| c < &p));
    }

    #[test]
    fn test_degenerate_modulus_rejected() {
        for modulus in [BigUint::zero(), BigUint::one()] {
            assert_eq!(
                round_constants(&modulus, 4, 2, 1),
                Err(PoseidonError::InvalidModulus(modulus.clone()))
            );
        }
    }
}
