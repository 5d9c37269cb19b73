use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform
///
/// # Returns
/// A sample from N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample a value whose base-10 logarithm is normal with the given mean and σ (dex)
pub fn sample_log10_normal(rng: &mut ChaChaRng, log_mean: f64, sigma_dex: f64) -> f64 {
    10f64.powf(sample_gaussian(rng, log_mean, sigma_dex))
}

/// Uniform sample in `[min, max)`; returns `min` for an empty range
pub fn sample_uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Multiplies `value` by a uniform factor in `[1 - fraction, 1 + fraction)`
pub fn jitter(rng: &mut ChaChaRng, value: f64, fraction: f64) -> f64 {
    value * sample_uniform(rng, 1.0 - fraction, 1.0 + fraction)
}

/// Metallicity [Fe/H] around a population mean with σ = 0.2 dex.
///
/// Clamped to [-3.0, 0.6] to avoid extreme outliers.
pub fn sample_metallicity(rng: &mut ChaChaRng, population_mean: f64) -> f64 {
    sample_gaussian(rng, population_mean, 0.2).clamp(-3.0, 0.6)
}

/// Walks cumulative probability bands with a single uniform roll.
///
/// Returns `None` when the roll falls past every band; callers supply the
/// terminal default.
pub fn pick_band<T: Copy>(roll: f64, bands: &[(T, f64)]) -> Option<T> {
    let mut cumulative = 0.0;
    for &(item, probability) in bands {
        cumulative += probability;
        if roll < cumulative {
            return Some(item);
        }
    }
    None
}
