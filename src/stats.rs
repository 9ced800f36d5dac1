//! Descriptive statistics over a finite sequence of values.
//!
//! Inputs are treated as multisets: order never affects a result. An empty
//! sequence is rejected up front instead of letting a division by zero
//! produce NaN.

use anyhow::{Result, bail};

/// Computes the arithmetic mean of a slice of values.
///
/// # Errors
///
/// Returns an error if `values` is empty; the mean of an empty sequence is
/// undefined.
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        bail!("cannot compute the average of an empty sequence");
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the population variance: the mean of squared deviations from the
/// mean, with divisor `n` (not `n - 1`).
///
/// # Errors
///
/// Returns an error if `values` is empty, propagated from [`average`].
pub fn variance(values: &[f64]) -> Result<f64> {
    let mean = average(values)?;
    Ok(values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64)
}

/// Computes the population standard deviation, the square root of
/// [`variance`].
///
/// # Errors
///
/// Returns an error if `values` is empty, propagated from [`variance`].
pub fn stdev(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}
