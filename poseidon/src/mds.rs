//! Cauchy MDS matrix.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::WIDTH;
use crate::errors::PoseidonError;

pub type MdsMatrix = [[BigUint; WIDTH]; WIDTH];

/// `M[i][j] = (i + t + j)^(-1) mod p`.
pub fn cauchy_matrix(modulus: &BigUint) -> Result<MdsMatrix, PoseidonError> {
    if modulus.is_zero() {
        return Err(PoseidonError::SingularMds(modulus.clone()));
    }
    let mut rows: Vec<[BigUint; WIDTH]> = Vec::with_capacity(WIDTH);
    for i in 0..WIDTH {
        let mut row: [BigUint; WIDTH] = Default::default();
        for (j, entry) in row.iter_mut().enumerate() {
            let denominator = BigUint::from(i + WIDTH + j) % modulus;
            *entry = denominator
                .modinv(modulus)
                .ok_or_else(|| PoseidonError::SingularMds(modulus.clone()))?;
        }
        rows.push(row);
    }
    rows.try_into()
        .map_err(|_| PoseidonError::SingularMds(modulus.clone()))
}

/// `state <- M * state (mod p)`.
pub(crate) fn apply(matrix: &MdsMatrix, state: &mut [BigUint; WIDTH], modulus: &BigUint) {
    let mixed: [BigUint; WIDTH] = core::array::from_fn(|i| {
        let mut acc = BigUint::zero();
        for (m, s) in matrix[i].iter().zip(state.iter()) {
            acc += m * s;
        }
        acc % modulus
    });
    *state = mixed;
}
