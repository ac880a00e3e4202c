use dx_core::SYMPTOM_COUNT;

/// Number of partial accumulators used by [`pairwise_sum`].
const LANES: usize = 8;

/// Sums a symptom-width slice matching the association order of NumPy's
/// pairwise sum.
///
/// The first eight values seed eight partial sums which are combined
/// pairwise; the remaining values are then added one by one.
pub fn pairwise_sum(values: &[f64; SYMPTOM_COUNT]) -> f64 {
    let r = &values[..LANES];
    let mut total = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
    for value in &values[LANES..] {
        total += value;
    }
    total
}

/// Rounds to two decimals, half to even on `value * 100`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
