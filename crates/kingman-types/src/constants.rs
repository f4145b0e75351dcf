// ─────────────────────────────────────────────────────────────────────
// Kingman Excursions — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// Values strictly below this are treated as "at zero" for nonnegative paths.
pub const DEFAULT_ZERO_THRESHOLD: f64 = 0.1;

/// Bessel dimension at which the process stops returning to zero.
pub const DELTA_RECURRENCE_LIMIT: f64 = 2.0;
