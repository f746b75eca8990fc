use log::debug;
use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{ModelError, Result};
use crate::{Matrix, Vector};

/// Feature matrix paired with its regression targets.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(ModelError::shape(format!(
                "features have {} samples but labels have {}",
                features.nrows(),
                labels.len()
            )));
        }

        if features.ncols() == 0 {
            return Err(ModelError::shape("features must have at least one column"));
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Splits off the last `test_size` fraction of rows, preserving order.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ModelError::invalid(format!(
                "test_size must be between 0 and 1, got {}",
                test_size
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples.saturating_sub(n_test);

        if n_test == 0 || n_train == 0 {
            return Err(ModelError::invalid(format!(
                "test_size {} leaves an empty split for {} samples",
                test_size, n_samples
            )));
        }

        let train = Dataset::new(
            self.features.slice(s![..n_train, ..]).to_owned(),
            self.labels.slice(s![..n_train]).to_owned(),
        )?;
        let test = Dataset::new(
            self.features.slice(s![n_train.., ..]).to_owned(),
            self.labels.slice(s![n_train..]).to_owned(),
        )?;

        Ok((train, test))
    }
}

/// Generates `y = X·weights + bias + noise` with features drawn uniformly
/// from `range` and Gaussian noise of standard deviation `noise_std`.
///
/// The same `seed` always yields the same dataset.
pub fn make_linear(
    n_samples: usize,
    weights: &Vector,
    bias: f64,
    range: (f64, f64),
    noise_std: f64,
    seed: u64,
) -> Result<Dataset> {
    let (low, high) = range;
    if !(low.is_finite() && high.is_finite() && low < high && (high - low).is_finite()) {
        return Err(ModelError::invalid(format!(
            "feature range must be finite with low < high, got ({}, {})",
            low, high
        )));
    }

    if !(noise_std.is_finite() && noise_std >= 0.0) {
        return Err(ModelError::invalid(format!(
            "noise_std must be a finite non-negative number, got {}",
            noise_std
        )));
    }

    let noise = Normal::new(0.0, noise_std).map_err(|e| {
        ModelError::invalid(format!("noise_std {} is not usable: {}", noise_std, e))
    })?;

    debug!(
        "generating {} synthetic samples with {} features (noise_std={})",
        n_samples,
        weights.len(),
        noise_std
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let features = Matrix::random_using(
        (n_samples, weights.len()),
        Uniform::new(low, high),
        &mut rng,
    );
    let labels = features.dot(weights) + bias + Vector::random_using(n_samples, noise, &mut rng);

    Dataset::new(features, labels)
}
