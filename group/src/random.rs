use num_bigint::BigUint;
use rand::Rng;

/// Samples an integer of exactly `bits` bits (top bit set).
///
/// Returns zero when `bits == 0`.
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::default();
    }
    let mut bytes = sample_bytes(rng, bits);
    let excess = (bytes.len() as u64 * 8 - bits) as u32;
    bytes[0] |= 0x80 >> excess;
    BigUint::from_bytes_be(&bytes)
}

/// Samples uniformly from `[0, bound)` by rejection.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(bound.bits() > 0, "bound must be non-zero");
    let bits = bound.bits();
    loop {
        let candidate = BigUint::from_bytes_be(&sample_bytes(rng, bits));
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Samples uniformly from `[low, high)`.
///
/// # Panics
///
/// Panics if `low >= high`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, low: &BigUint, high: &BigUint) -> BigUint {
    assert!(low < high, "empty range");
    low + random_below(rng, &(high - low))
}

// Big-endian bytes holding `bits` uniformly random bits, excess top bits cleared.
fn sample_bytes<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> Vec<u8> {
    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    let excess = (len as u64 * 8 - bits) as u32;
    bytes[0] &= 0xFF >> excess;
    bytes
}
