// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Noise
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian noise for time-discretized SDEs on [0, 1].

use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

/// `n` i.i.d. N(0, σ²) draws.
///
/// No check on `std_dev`: a negative or infinite scale is applied as-is.
pub fn scaled_gaussian<R: Rng + ?Sized>(n: usize, std_dev: f64, rng: &mut R) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| rng.sample::<f64, _>(StandardNormal) * std_dev)
}

/// Brownian increments for an `n`-step grid on [0, 1]: N(0, 1/n).
///
/// Draws exactly `n` normals, one per grid point, so a seeded RNG
/// yields the same increments regardless of which process consumes them.
pub fn gaussian_increments<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Array1<f64> {
    scaled_gaussian(n, 1.0 / (n as f64).sqrt(), rng)
}
