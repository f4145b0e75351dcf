// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Bessel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bessel process paths on [0, 1].
//!
//! Both schemes discretize the squared Bessel process
//! dX = δ dt + 2 √X dW, X_0 = 0, on n equal steps of size 1/n,
//! and return the Bessel path √|X|.
//!
//! Neither scheme validates δ or n. n = 0 gives an empty path,
//! n = 1 gives `[0.0]`.

use kingman_math::noise::gaussian_increments;
use kingman_types::config::BesselScheme;
use kingman_types::state::Trajectory;
use ndarray::Array1;
use rand::Rng;

/// Explicit Euler–Maruyama on the squared process, driven by `w`:
///
/// x[i] = x[i-1] + δ/n + 2 √|x[i-1]| · w[i-1]
///
/// `w[n-1]` is never used.
pub fn explicit_bessel_path(delta: f64, w: &Array1<f64>) -> Trajectory {
    let n = w.len();
    let drift = delta / n as f64;
    let mut x: Array1<f64> = Array1::zeros(n);
    for i in 1..n {
        x[i] = x[i - 1] + drift + 2.0 * x[i - 1].abs().sqrt() * w[i - 1];
    }
    x.mapv_inplace(|v: f64| v.abs().sqrt());
    x
}

/// Square-root update of the squared process, driven by `w`:
///
/// x[i] = (w[i] + √(w[i]² + δ/n + x[i-1]))²
///
/// Uses the current-step noise `w[i]` and a direct closed form rather
/// than a fixed-point solve. `w[0]` is never used.
pub fn implicit_bessel_path(delta: f64, w: &Array1<f64>) -> Trajectory {
    let n = w.len();
    let drift = delta / n as f64;
    let mut x: Array1<f64> = Array1::zeros(n);
    for i in 1..n {
        let root = w[i] + (w[i] * w[i] + drift + x[i - 1]).sqrt();
        x[i] = root * root;
    }
    x.mapv_inplace(|v: f64| v.abs().sqrt());
    x
}

/// Bessel path of dimension `delta` with `n` points, explicit scheme.
pub fn explicit_bessel<R: Rng + ?Sized>(delta: f64, n: usize, rng: &mut R) -> Trajectory {
    let w = gaussian_increments(n, rng);
    explicit_bessel_path(delta, &w)
}

/// Bessel path of dimension `delta` with `n` points, implicit scheme.
pub fn implicit_bessel<R: Rng + ?Sized>(delta: f64, n: usize, rng: &mut R) -> Trajectory {
    let w = gaussian_increments(n, rng);
    implicit_bessel_path(delta, &w)
}

/// Dispatch on the configured scheme.
pub fn bessel<R: Rng + ?Sized>(
    scheme: BesselScheme,
    delta: f64,
    n: usize,
    rng: &mut R,
) -> Trajectory {
    match scheme {
        BesselScheme::Explicit => explicit_bessel(delta, n, rng),
        BesselScheme::Implicit => implicit_bessel(delta, n, rng),
    }
}
