//! Shannon entropy of an observed distribution

use crate::math;

/// Shannon entropy in bits of a distribution given by occurrence counts
///
/// Computes `H = -Σ (c/total) · log2(c/total)` over the non-zero counts in a
/// single pass. `total` must be the sum of `counts`; an empty distribution
/// has zero entropy.
///
/// # Example
///
/// ```
/// use bytestats::statistics::shannon_entropy;
///
/// // Four equally likely outcomes carry two bits
/// let h = shannon_entropy([10, 10, 10, 10], 40);
/// assert!((h - 2.0).abs() < 1e-12);
/// ```
pub fn shannon_entropy<I>(counts: I, total: u64) -> f64
where
    I: IntoIterator<Item = u64>,
{
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for count in counts {
        let freq = count as f64 / total;
        if freq > 0.0 {
            entropy -= freq * math::log2(freq);
        }
    }

    // A single outcome evaluates to -0.0
    entropy.max(0.0)
}
