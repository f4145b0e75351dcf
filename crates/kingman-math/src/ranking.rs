//! Descending ranking with zero padding.

use ndarray::Array1;

/// Sort in place, largest first.
pub fn sort_descending(x: &mut Array1<f64>) {
    let mut v = x.to_vec();
    v.sort_by(|a, b| b.total_cmp(a));
    for (slot, val) in x.iter_mut().zip(v) {
        *slot = val;
    }
}

/// Place `values` into a length-`n` zero array and rank it descending.
/// Values beyond the first `n` are dropped.
pub fn ranked_padded(values: &[f64], n: usize) -> Array1<f64> {
    let mut out: Array1<f64> = Array1::zeros(n);
    for (slot, &v) in out.iter_mut().zip(values) {
        *slot = v;
    }
    sort_descending(&mut out);
    out
}

/// True if no element exceeds its predecessor.
pub fn is_descending(x: &Array1<f64>) -> bool {
    x.iter().zip(x.iter().skip(1)).all(|(a, b)| a >= b)
}
