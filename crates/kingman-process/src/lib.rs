// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Process
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bessel and Brownian path samplers, excursion-length extraction, and
//! the Poisson–Dirichlet reference for Kingman/Pitman–Yor comparisons.

pub mod bessel;
pub mod bridge;
pub mod excursion;
pub mod kingman;
pub mod sampler;
