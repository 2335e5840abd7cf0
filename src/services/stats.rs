//! Numeric helpers behind the byline statistics.
//!
//! `min`, `max` and `mean` expect a non-empty slice; an empty one yields a
//! meaningless value (infinities, NaN) rather than an error. The sample
//! standard deviation is the only helper with a hard precondition worth
//! surfacing, since its n-1 denominator vanishes below two values.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("sample standard deviation needs at least 2 values, got {0}")]
    InsufficientData(usize),
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn sample_stdev(values: &[f64]) -> Result<f64, StatsError> {
    if values.len() < 2 {
        return Err(StatsError::InsufficientData(values.len()));
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Ok(variance.sqrt())
}
