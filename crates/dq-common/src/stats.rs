//! Descriptive-statistics primitives.
//!
//! All functions are total: undefined statistics (empty input, zero spread)
//! come back as `None` rather than NaN or a panic. Quantiles use the
//! linear-interpolation definition, and the standard deviation is the
//! population form (divide by n).

/// IQR-derived capping bounds for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub lower: f64,
    pub upper: f64,
    pub iqr: f64,
}

/// Linear-interpolation quantile over an ascending-sorted slice.
///
/// `q` is a fraction in `[0, 1]`. Returns `None` for an empty slice.
pub fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    if sorted.len() == 1 {
        return Some(sorted[0]);
    }
    let q = q.clamp(0.0, 1.0);
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Median over an ascending-sorted slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    quantile_linear(sorted, 0.5)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divide by n, not n-1).
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// IQR capping bounds over an ascending-sorted slice:
/// `lower = q1 - factor*iqr`, `upper = q3 + factor*iqr`.
///
/// Returns `None` when the quantiles are undefined (empty input).
pub fn iqr_bounds(sorted: &[f64], factor: f64) -> Option<IqrBounds> {
    let q1 = quantile_linear(sorted, 0.25)?;
    let q3 = quantile_linear(sorted, 0.75)?;
    let iqr = q3 - q1;
    Some(IqrBounds {
        lower: q1 - factor * iqr,
        upper: q3 + factor * iqr,
        iqr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [25.0, 30.0, 200.0];
        assert_eq!(quantile_linear(&values, 0.25), Some(27.5));
        assert_eq!(quantile_linear(&values, 0.5), Some(30.0));
        assert_eq!(quantile_linear(&values, 0.75), Some(115.0));
    }

    #[test]
    fn quantile_edges() {
        assert_eq!(quantile_linear(&[], 0.5), None);
        assert_eq!(quantile_linear(&[7.0], 0.95), Some(7.0));
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_linear(&values, 0.0), Some(1.0));
        assert_eq!(quantile_linear(&values, 1.0), Some(4.0));
    }

    #[test]
    fn median_even_count_averages_middle_pair() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[10.0, 20.0]), Some(15.0));
    }

    #[test]
    fn population_std_divides_by_n() {
        // values 2, 4: mean 3, variance ((1)+(1))/2 = 1
        assert_eq!(population_std(&[2.0, 4.0]), Some(1.0));
        assert_eq!(population_std(&[]), None);
        assert_eq!(population_std(&[5.0]), Some(0.0));
    }

    #[test]
    fn iqr_bounds_symmetric_around_quartiles() {
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        let bounds = iqr_bounds(&values, 1.5).unwrap();
        assert_eq!(bounds.iqr, 2.0);
        assert_eq!(bounds.lower, -1.0);
        assert_eq!(bounds.upper, 7.0);
    }

    #[test]
    fn iqr_bounds_zero_spread() {
        let values = [5.0, 5.0, 5.0];
        let bounds = iqr_bounds(&values, 1.5).unwrap();
        assert_eq!(bounds.iqr, 0.0);
        assert_eq!(bounds.lower, 5.0);
        assert_eq!(bounds.upper, 5.0);
    }
}
