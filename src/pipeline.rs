use crate::error::Result;
use crate::logistic_regression::{with_bias, LogisticRegression};
use crate::nearest_neighbours::{classify, nearest, Neighbour};
use crate::parse::{label_column, load_matrix};
use crate::report::{write_neighbours, write_weights};
use ndarray::{Array1, ArrayView1};
use std::io::Write;
use std::path::Path;

/// Loads both files, reports the `k` samples closest to `query`.
pub fn run_nearest_neighbours<W: Write>(
    input_filepath: impl AsRef<Path>,
    labels_filepath: impl AsRef<Path>,
    query: ArrayView1<i64>,
    k: usize,
    out: &mut W,
) -> Result<Vec<Neighbour>> {
    let features = load_matrix(input_filepath)?;
    let labels = label_column(&load_matrix(labels_filepath)?)?;

    let neighbours = nearest(&features, labels.view(), query, k)?;
    write_neighbours(out, &neighbours)?;

    if let Some(class) = classify(&neighbours) {
        log::info!("query {query} votes for class {class}");
    }

    Ok(neighbours)
}

/// Loads both files, trains from all-ones weights, reports the final weights.
pub fn run_logistic_regression<W: Write>(
    input_filepath: impl AsRef<Path>,
    labels_filepath: impl AsRef<Path>,
    learning_rate: f64,
    number_of_epochs: usize,
    out: &mut W,
) -> Result<Array1<f64>> {
    let samples = with_bias(&load_matrix(input_filepath)?);
    let labels = label_column(&load_matrix(labels_filepath)?)?;

    let mut model = LogisticRegression::new(samples.ncols(), learning_rate);
    model.fit(&samples, labels.view(), number_of_epochs)?;
    write_weights(out, &model.weights)?;

    let accuracy = model.accuracy(&samples, labels.view())? * 100.0;
    log::info!("logistic regression training accuracy: {accuracy:.3}%");

    Ok(model.weights)
}
