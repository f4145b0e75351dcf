// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Brownian Bridge
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Brownian motion and Brownian bridge on [0, 1].
//!
//! The bridge uses B_t = Z_t − t·Z_1 applied to a random walk Z
//! re-based so that Z_0 = 0. Both endpoints are exactly zero.

use kingman_math::grid::{cumsum, unit_time_grid};
use kingman_math::noise::gaussian_increments;
use kingman_types::state::Trajectory;
use ndarray::Array1;
use rand::Rng;

/// Random walk with increments `w`: `out[i] = w[0] + ... + w[i]`.
pub fn brownian_motion_path(w: &Array1<f64>) -> Trajectory {
    cumsum(w)
}

/// Brownian motion sampled at `n` points with N(0, 1/n) increments.
pub fn brownian_motion<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Trajectory {
    brownian_motion_path(&gaussian_increments(n, rng))
}

/// Bridge built from increments `w` on the grid t[i] = i/(n-1).
///
/// With Z = cumsum(w) − w[0], returns Z − t·Z[n-1]. One point gives
/// `[NaN]` (0/0 in the grid), zero points give an empty array.
pub fn brownian_bridge_path(w: &Array1<f64>) -> Trajectory {
    let n = w.len();
    if n == 0 {
        return Array1::zeros(0);
    }
    let mut z = cumsum(w);
    let z0 = z[0];
    z.mapv_inplace(|v| v - z0);
    let z_end = z[n - 1];
    let t = unit_time_grid(n);
    z - &(t * z_end)
}

/// Brownian bridge sampled at `n` points, pinned to 0 at t = 0 and t = 1.
pub fn brownian_bridge<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Trajectory {
    if n < 2 {
        tracing::warn!(n, "brownian bridge needs at least two points; output is degenerate");
    }
    brownian_bridge_path(&gaussian_increments(n, rng))
}
