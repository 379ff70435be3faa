use crate::distance::euclidean;
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};

/// A training sample ranked by its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub index: usize,
    pub distance: f64,
    pub label: i64,
}

/// Ranks every sample by Euclidean distance to `query`, closest first.
///
/// The sort is stable: samples at equal distance stay in their original order.
pub fn rank(
    features: &Array2<i64>,
    labels: ArrayView1<i64>,
    query: ArrayView1<i64>,
) -> Result<Vec<Neighbour>> {
    if features.nrows() != labels.len() {
        return Err(Error::LengthMismatch {
            features: features.nrows(),
            labels: labels.len(),
        });
    }

    let mut neighbours = features
        .rows()
        .into_iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(index, (row, &label))| {
            Ok(Neighbour {
                index,
                distance: euclidean(row, query)?,
                label,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    neighbours.sort_by(|first, second| first.distance.total_cmp(&second.distance));

    Ok(neighbours)
}

/// The `k` samples closest to `query`.
pub fn nearest(
    features: &Array2<i64>,
    labels: ArrayView1<i64>,
    query: ArrayView1<i64>,
    k: usize,
) -> Result<Vec<Neighbour>> {
    if features.nrows() < k {
        return Err(Error::NotEnoughSamples {
            requested: k,
            available: features.nrows(),
        });
    }

    let mut neighbours = rank(features, labels, query)?;
    neighbours.truncate(k);

    Ok(neighbours)
}

/// Majority vote over ranked neighbours.
///
/// Equally frequent labels are resolved in favour of the one whose closest
/// member comes first in `neighbours`.
pub fn classify(neighbours: &[Neighbour]) -> Option<i64> {
    // (label, votes), in order of first appearance
    let mut votes: Vec<(i64, usize)> = Vec::new();

    for neighbour in neighbours {
        match votes.iter_mut().find(|(label, _)| *label == neighbour.label) {
            Some((_, count)) => *count += 1,
            None => votes.push((neighbour.label, 1)),
        }
    }

    votes
        .into_iter()
        .rev()
        .max_by_key(|&(_, count)| count)
        .map(|(label, _)| label)
}
