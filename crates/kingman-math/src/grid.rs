//! Time grid and running sums on [0, 1].

use ndarray::Array1;

/// `t[i] = i / (n - 1)` for `i in 0..n`.
///
/// For `n >= 2` the endpoints are exactly 0.0 and 1.0. A single point
/// divides by zero and yields `[NaN]`; that degeneracy is passed through.
pub fn unit_time_grid(n: usize) -> Array1<f64> {
    let denom = n.saturating_sub(1) as f64;
    Array1::from_shape_fn(n, |i| i as f64 / denom)
}

/// Inclusive prefix sum: `out[i] = x[0] + ... + x[i]`.
pub fn cumsum(x: &Array1<f64>) -> Array1<f64> {
    let mut out: Array1<f64> = Array1::zeros(x.len());
    let mut acc = 0.0;
    for (o, &v) in out.iter_mut().zip(x.iter()) {
        acc += v;
        *o = acc;
    }
    out
}
