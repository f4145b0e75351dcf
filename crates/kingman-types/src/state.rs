// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

use crate::config::BesselScheme;

/// Process values at n equally spaced times on [0, 1].
pub type Trajectory = Array1<f64>;

/// Excursion lengths in grid steps, descending, zero-padded to the
/// trajectory length.
pub type ExcursionLengths = Array1<f64>;

/// One sampled Bessel path together with the statistics derived from it.
#[derive(Debug, Clone)]
pub struct SampledPath {
    pub scheme: BesselScheme,
    pub delta: f64,
    pub trajectory: Trajectory,
    pub excursions: ExcursionLengths,
    /// `excursions` divided by their total, still descending.
    pub ranked_frequencies: Array1<f64>,
}

impl SampledPath {
    pub fn n_points(&self) -> usize {
        self.trajectory.len()
    }

    /// Number of nonzero excursion lengths.
    pub fn n_excursions(&self) -> usize {
        self.excursions.iter().take_while(|&&l| l > 0.0).count()
    }

    /// Total path length covered by complete excursions, in grid steps.
    pub fn covered_steps(&self) -> f64 {
        self.excursions.sum()
    }

    /// Longest excursion as a fraction of the horizon.
    pub fn longest_fraction(&self) -> f64 {
        let n = self.n_points();
        if n < 2 {
            return 0.0;
        }
        self.excursions[0] / (n - 1) as f64
    }
}
