// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Poisson–Dirichlet Reference
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ranked frequencies and the two-parameter Poisson–Dirichlet law.
//!
//! Ranked excursion lengths of a Bessel process of dimension δ ∈ (0, 2)
//! on [0, 1] follow PD(α, 0) with α = 1 − δ/2.
//!
//! Reference: Pitman & Yor, Ann. Probab. 25 (1997), Prop. 21.

use kingman_math::ranking::sort_descending;
use kingman_types::constants::DELTA_RECURRENCE_LIMIT;
use kingman_types::error::{KingmanError, KingmanResult};
use kingman_types::state::ExcursionLengths;
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Beta, Distribution};

/// Pitman–Yor discount α = 1 − δ/2.
pub fn pitman_yor_alpha(delta: f64) -> f64 {
    1.0 - delta / DELTA_RECURRENCE_LIMIT
}

/// Lengths divided by their total. All zeros when there is no excursion.
pub fn ranked_frequencies(lengths: &ExcursionLengths) -> Array1<f64> {
    let total = lengths.sum();
    if total > 0.0 {
        lengths / total
    } else {
        Array1::zeros(lengths.len())
    }
}

fn check_pd_params(alpha: f64, theta: f64, k: usize) -> KingmanResult<()> {
    if !(0.0..1.0).contains(&alpha) {
        return Err(KingmanError::InvalidParameter(format!(
            "alpha must lie in [0, 1), got {alpha}"
        )));
    }
    if !theta.is_finite() || theta <= -alpha {
        return Err(KingmanError::InvalidParameter(format!(
            "theta must be finite and > -alpha, got theta={theta}, alpha={alpha}"
        )));
    }
    if k == 0 {
        return Err(KingmanError::InvalidParameter(
            "need at least one stick".to_string(),
        ));
    }
    Ok(())
}

/// First `k` GEM(α, θ) stick-breaking weights in size-biased order.
///
/// V_j ~ Beta(1 − α, θ + jα), P_j = V_j · Π_{i<j} (1 − V_i).
/// The weights sum to 1 − Π (1 − V_j) ≤ 1.
pub fn gem_weights<R: Rng + ?Sized>(
    alpha: f64,
    theta: f64,
    k: usize,
    rng: &mut R,
) -> KingmanResult<Array1<f64>> {
    check_pd_params(alpha, theta, k)?;

    let mut weights: Array1<f64> = Array1::zeros(k);
    let mut remaining = 1.0;
    for j in 0..k {
        let stick = Beta::new(1.0 - alpha, theta + (j + 1) as f64 * alpha)
            .map_err(|e| KingmanError::InvalidParameter(e.to_string()))?;
        let v = stick.sample(rng);
        weights[j] = remaining * v;
        remaining *= 1.0 - v;
    }
    Ok(weights)
}

/// Truncated PD(α, θ) draw: `k` GEM weights ranked descending.
pub fn poisson_dirichlet<R: Rng + ?Sized>(
    alpha: f64,
    theta: f64,
    k: usize,
    rng: &mut R,
) -> KingmanResult<Array1<f64>> {
    let mut weights = gem_weights(alpha, theta, k, rng)?;
    sort_descending(&mut weights);
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingman_math::ranking::is_descending;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alpha_from_delta() {
        assert!((pitman_yor_alpha(1.0) - 0.5).abs() < 1e-15);
        assert!((pitman_yor_alpha(0.5) - 0.75).abs() < 1e-15);
        assert!(pitman_yor_alpha(2.0).abs() < 1e-15);
    }

    #[test]
    fn test_ranked_frequencies_normalized() {
        let lens = Array1::from(vec![6.0, 3.0, 1.0, 0.0]);
        let f = ranked_frequencies(&lens);
        assert_eq!(f.to_vec(), vec![0.6, 0.3, 0.1, 0.0]);
    }

    #[test]
    fn test_ranked_frequencies_no_excursion() {
        let f = ranked_frequencies(&Array1::zeros(5));
        assert_eq!(f.to_vec(), vec![0.0; 5]);
    }

    #[test]
    fn test_pd_sorted_and_subprobability() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = poisson_dirichlet(0.5, 0.0, 200, &mut rng).unwrap();
        assert_eq!(p.len(), 200);
        assert!(is_descending(&p));
        assert!(p.iter().all(|&x| (0.0..=1.0).contains(&x)));
        let total = p.sum();
        assert!(total <= 1.0 + 1e-12 && total > 0.5, "total = {total}");
    }

    #[test]
    fn test_gem_first_stick_mean() {
        // E[P_1] = E[V_1] = (1 − α) / (1 + θ)
        let mut rng = StdRng::seed_from_u64(2026);
        let (alpha, theta) = (0.3, 1.0);
        let n_draws = 4000;
        let mut acc = 0.0;
        for _ in 0..n_draws {
            acc += gem_weights(alpha, theta, 1, &mut rng).unwrap()[0];
        }
        let mean = acc / n_draws as f64;
        let expected = (1.0 - alpha) / (1.0 + theta);
        assert!(
            (mean - expected).abs() < 0.02,
            "E[P_1] ≈ {mean}, expected {expected}"
        );
    }

    #[test]
    fn test_dirichlet_process_limit() {
        // α = 0 with θ > 0 is the one-parameter (Kingman) case.
        let mut rng = StdRng::seed_from_u64(3);
        let p = poisson_dirichlet(0.0, 2.0, 100, &mut rng).unwrap();
        assert!(is_descending(&p));
        assert!((p.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(poisson_dirichlet(1.0, 0.0, 10, &mut rng).is_err());
        assert!(poisson_dirichlet(-0.1, 0.0, 10, &mut rng).is_err());
        assert!(poisson_dirichlet(0.5, -0.5, 10, &mut rng).is_err());
        assert!(poisson_dirichlet(0.0, 0.0, 10, &mut rng).is_err());
        assert!(poisson_dirichlet(0.5, f64::NAN, 10, &mut rng).is_err());
        assert!(matches!(
            poisson_dirichlet(0.5, 0.0, 0, &mut rng),
            Err(KingmanError::InvalidParameter(_))
        ));
    }
}
