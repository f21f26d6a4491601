//! Random number generator (xorshift32) for spawn positions and tick jitter.

pub(crate) const DEFAULT_SEED: u32 = 12345;

#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform draw in `[-range, range]`.
#[inline]
pub(crate) fn symmetric(state: &mut u32, range: f32) -> f32 {
    let unit = xorshift32(state) as f32 / u32::MAX as f32;
    (unit * 2.0 - 1.0) * range
}

/// Never seed xorshift with zero; it would stay zero forever.
#[inline]
pub(crate) fn seed_or_default(seed: u32) -> u32 {
    if seed == 0 {
        DEFAULT_SEED
    } else {
        seed
    }
}
