// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Excursion Lengths
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Excursion lengths away from zero, measured in grid steps.
//!
//! A path is reduced to the ordered set of indices where it sits at
//! zero; the gaps between consecutive zero indices are the excursion
//! lengths. Output is always the trajectory's length, descending,
//! zero-padded. Fewer than two zeros gives all zeros.

use kingman_math::ranking::ranked_padded;
use kingman_types::state::{ExcursionLengths, Trajectory};

/// Indices with `traj[i] < thr`, for nonnegative paths (Bessel).
pub fn zero_indices_below(traj: &Trajectory, thr: f64) -> Vec<usize> {
    traj.iter()
        .enumerate()
        .filter(|&(_, &v)| v < thr)
        .map(|(i, _)| i)
        .collect()
}

/// Indices `i < n-1` where the path touches or crosses zero between
/// `i` and `i+1` (`traj[i]·traj[i+1] <= 0`). The last index never counts.
pub fn sign_change_indices(traj: &Trajectory) -> Vec<usize> {
    traj.iter()
        .zip(traj.iter().skip(1))
        .enumerate()
        .filter(|&(_, (&a, &b))| a * b <= 0.0)
        .map(|(i, _)| i)
        .collect()
}

fn gaps(zeros: &[usize]) -> Vec<f64> {
    zeros.windows(2).map(|p| (p[1] - p[0]) as f64).collect()
}

/// Excursion lengths of a nonnegative path, zeros detected by threshold.
pub fn excursion_lengths(traj: &Trajectory, thr: f64) -> ExcursionLengths {
    let zeros = zero_indices_below(traj, thr);
    ranked_padded(&gaps(&zeros), traj.len())
}

/// Excursion lengths of a signed path, zeros detected by sign change.
pub fn brownian_excursion_lengths(traj: &Trajectory) -> ExcursionLengths {
    let zeros = sign_change_indices(traj);
    ranked_padded(&gaps(&zeros), traj.len())
}
