use crate::error::{Error, Result};
use nalgebra::DVector;
use ndarray::ArrayView1;

/// Euclidean distance between two integer vectors of equal length.
pub fn euclidean(first: ArrayView1<i64>, second: ArrayView1<i64>) -> Result<f64> {
    if first.len() != second.len() {
        return Err(Error::DimensionMismatch {
            expected: first.len(),
            got: second.len(),
        });
    }

    Ok((to_vector(first) - to_vector(second)).norm())
}

fn to_vector(values: ArrayView1<i64>) -> DVector<f64> {
    DVector::from_iterator(values.len(), values.iter().map(|&value| value as f64))
}
