// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Config-driven sampling of one Bessel path and its excursion statistics.

use kingman_types::config::SamplingConfig;
use kingman_types::error::{KingmanError, KingmanResult};
use kingman_types::state::SampledPath;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bessel::bessel;
use crate::excursion::excursion_lengths;
use crate::kingman::{poisson_dirichlet, ranked_frequencies};

/// Validated sampling parameters bound to the Bessel/excursion pipeline.
pub struct ExcursionSampler {
    config: SamplingConfig,
}

impl ExcursionSampler {
    pub fn new(config: SamplingConfig) -> KingmanResult<Self> {
        config.validate()?;
        tracing::debug!(
            delta = config.delta,
            n_points = config.n_points,
            scheme = ?config.scheme,
            zero_threshold = config.zero_threshold,
            "excursion sampler ready"
        );
        Ok(ExcursionSampler { config })
    }

    pub fn from_file(path: &str) -> KingmanResult<Self> {
        Self::new(SamplingConfig::from_file(path)?)
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Seeded from `config.seed` when present, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Draw one path with the configured scheme and reduce it to its
    /// ranked excursion lengths.
    pub fn sample_path<R: Rng + ?Sized>(&self, rng: &mut R) -> SampledPath {
        let cfg = &self.config;
        let trajectory = bessel(cfg.scheme, cfg.delta, cfg.n_points, rng);
        let excursions = excursion_lengths(&trajectory, cfg.zero_threshold);
        let ranked_frequencies = ranked_frequencies(&excursions);
        SampledPath {
            scheme: cfg.scheme,
            delta: cfg.delta,
            trajectory,
            excursions,
            ranked_frequencies,
        }
    }

    /// PD(1 − δ/2, 0) draw with one entry per grid point, for side-by-side
    /// comparison with `sample_path(..).ranked_frequencies`.
    pub fn reference_frequencies<R: Rng + ?Sized>(&self, rng: &mut R) -> KingmanResult<Array1<f64>> {
        if !self.config.is_recurrent() {
            return Err(KingmanError::InvalidParameter(format!(
                "no Poisson–Dirichlet reference for non-recurrent delta={}",
                self.config.delta
            )));
        }
        poisson_dirichlet(self.config.pitman_yor_alpha(), 0.0, self.config.n_points, rng)
    }
}
