use crate::domain::*;

/// Generate normal like distribution with spike in the middle,
/// all values are in [0, 1].
/// Larger `variance` gives a narrower spike.
pub fn normal_ic(sequence: &mut Sequence, variance: f64) {
    let n_f = sequence.len() as f64;
    let sigma_sq: f64 = (n_f / variance) * (n_f / variance);
    sequence.set_values(|i| {
        let x = (i as f64) - (n_f / 2.0);
        let exp = -x * x / (2.0 * sigma_sq);
        exp.exp()
    });
}
