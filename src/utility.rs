use crate::error::{RecordError, Result};

/// Computes the arithmetic mean of integer scores.
///
/// # Errors
///
/// Returns [`RecordError::EmptyMean`] for empty input.
pub fn mean(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(RecordError::EmptyMean);
    }
    Ok(values.iter().sum::<i64>() as f64 / values.len() as f64)
}
