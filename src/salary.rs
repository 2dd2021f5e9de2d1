/// Collapses a vacancy's salary fork into a single rouble figure.
///
/// Open-ended ranges are skewed toward the known bound: a lower bound alone
/// is discounted to 80%, an upper bound alone is inflated to 120%. No bounds
/// at all means the vacancy carries no usable salary and yields `None`.
pub fn estimate(from: Option<u64>, to: Option<u64>) -> Option<u64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2),
        (Some(from), None) => Some((from as f64 * 0.8) as u64),
        (None, Some(to)) => Some((to as f64 * 1.2) as u64),
        (None, None) => None,
    }
}
