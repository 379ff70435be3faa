use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Copies `features` into a float matrix with a leading column of ones.
pub fn with_bias(features: &Array2<i64>) -> Array2<f64> {
    let (samples_count, dimensions) = features.dim();
    let mut extended = Array2::ones((samples_count, dimensions + 1));

    for ((i, j), &feature) in features.indexed_iter() {
        extended[(i, j + 1)] = feature as f64;
    }

    extended
}

pub fn dot(first: ArrayView1<f64>, second: ArrayView1<f64>) -> f64 {
    first.dot(&second)
}

/// `1 / (1 + exp(-z))`; fails once `exp(-z)` leaves the `f64` range.
pub fn sigmoid(z: f64) -> Result<f64> {
    let exponential = (-z).exp();
    if exponential.is_infinite() {
        return Err(Error::Overflow { dot: z });
    }

    Ok(1.0 / (1.0 + exponential))
}

/// Logistic hypothesis `sigmoid(w . x)`.
pub fn hypothesis(weights: ArrayView1<f64>, features: ArrayView1<f64>) -> Result<f64> {
    sigmoid(dot(weights, features))
}

/// Logistic regression trained by per-sample gradient ascent.
pub struct LogisticRegression {
    pub weights: Array1<f64>,
    pub learning_rate: f64,
}

impl LogisticRegression {
    /// `dimensions` counts the bias column; every weight starts at one.
    pub fn new(dimensions: usize, learning_rate: f64) -> Self {
        Self {
            weights: Array1::ones(dimensions),
            learning_rate,
        }
    }

    /// Runs `number_of_epochs` passes over `samples` in their stored order.
    pub fn fit(
        &mut self,
        samples: &Array2<f64>,
        labels: ArrayView1<i64>,
        number_of_epochs: usize,
    ) -> Result<()> {
        self.check(samples, labels)?;

        for epoch in 0..number_of_epochs {
            self.step(samples, labels)?;
            log::debug!("epoch {}: weights {:?}", epoch + 1, self.weights.to_vec());
        }

        Ok(())
    }

    pub fn predict_probability(&self, features: ArrayView1<f64>) -> Result<f64> {
        hypothesis(self.weights.view(), features)
    }

    pub fn predict(&self, features: ArrayView1<f64>) -> Result<i64> {
        Ok(i64::from(self.predict_probability(features)? > 0.5))
    }

    /// Share of `samples` whose predicted class matches its label.
    pub fn accuracy(&self, samples: &Array2<f64>, labels: ArrayView1<i64>) -> Result<f64> {
        self.check(samples, labels)?;

        if labels.is_empty() {
            return Ok(0.0);
        }

        let mut correct_predictions = 0;
        for (sample, &label) in samples.axis_iter(Axis(0)).zip(labels.iter()) {
            if self.predict(sample)? == label {
                correct_predictions += 1;
            }
        }

        Ok(correct_predictions as f64 / labels.len() as f64)
    }

    fn step(&mut self, samples: &Array2<f64>, labels: ArrayView1<i64>) -> Result<()> {
        for (sample, &label) in samples.axis_iter(Axis(0)).zip(labels.iter()) {
            let value = hypothesis(self.weights.view(), sample)?;
            let scale = self.learning_rate * (label as f64 - value) * value * (1.0 - value);

            self.weights
                .zip_mut_with(&sample, |weight, &feature| *weight += scale * feature);
        }

        Ok(())
    }

    fn check(&self, samples: &Array2<f64>, labels: ArrayView1<i64>) -> Result<()> {
        if samples.nrows() != labels.len() {
            return Err(Error::LengthMismatch {
                features: samples.nrows(),
                labels: labels.len(),
            });
        }

        if samples.ncols() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                expected: self.weights.len(),
                got: samples.ncols(),
            });
        }

        Ok(())
    }
}
