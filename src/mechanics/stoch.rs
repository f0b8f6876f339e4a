/// Stochastic mechanics: RNG construction and draws.
/// Draws take any `RngCore` by `&mut` so each run owns its source.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// WyRand seeded from a `u64`.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform [0, 1) from the top 53 bits.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}
