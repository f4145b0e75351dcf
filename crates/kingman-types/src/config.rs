// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ZERO_THRESHOLD, DELTA_RECURRENCE_LIMIT};
use crate::error::{KingmanError, KingmanResult};

/// Discretization used to generate a Bessel path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BesselScheme {
    /// Forward Euler–Maruyama on the squared process.
    #[default]
    Explicit,
    /// Closed-form square-root update driven by the current-step noise.
    Implicit,
}

/// Parameters for sampling one Bessel path and its excursion lengths.
/// Only `delta` and `n_points` are required in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Bessel dimension δ.
    pub delta: f64,
    /// Number of equally spaced points on [0, 1].
    pub n_points: usize,
    #[serde(default)]
    pub scheme: BesselScheme,
    /// Path values below this count as visits to zero (default: 0.1)
    #[serde(default = "default_zero_threshold")]
    pub zero_threshold: f64,
    /// Fixed RNG seed. When absent the sampler seeds from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_zero_threshold() -> f64 {
    DEFAULT_ZERO_THRESHOLD
}

impl SamplingConfig {
    pub fn new(delta: f64, n_points: usize) -> Self {
        SamplingConfig {
            delta,
            n_points,
            scheme: BesselScheme::default(),
            zero_threshold: DEFAULT_ZERO_THRESHOLD,
            seed: None,
        }
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> KingmanResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path, delta = config.delta, n_points = config.n_points, "loaded sampling config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> KingmanResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges. The numerical routines themselves accept
    /// anything; this gate only applies to config-driven sampling.
    pub fn validate(&self) -> KingmanResult<()> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(KingmanError::ConfigError(format!(
                "delta must be finite and > 0, got {}",
                self.delta
            )));
        }
        if self.n_points < 2 {
            return Err(KingmanError::ConfigError(format!(
                "n_points must be >= 2, got {}",
                self.n_points
            )));
        }
        if !self.zero_threshold.is_finite() || self.zero_threshold <= 0.0 {
            return Err(KingmanError::ConfigError(format!(
                "zero_threshold must be finite and > 0, got {}",
                self.zero_threshold
            )));
        }
        Ok(())
    }

    /// Pitman–Yor discount α = 1 − δ/2 of the ranked excursion lengths.
    pub fn pitman_yor_alpha(&self) -> f64 {
        1.0 - self.delta / DELTA_RECURRENCE_LIMIT
    }

    /// True when the process keeps returning to zero (δ < 2).
    pub fn is_recurrent(&self) -> bool {
        self.delta < DELTA_RECURRENCE_LIMIT
    }
}
