use log::{Level, debug, log_enabled, trace};

use crate::dataset::Dataset;
use crate::error::{ModelError, Result};
use crate::params::GradientDescentParams;
use crate::{Matrix, Vector, metrics};

#[derive(Clone, Debug, PartialEq)]
enum FitState {
    Unfitted,
    Fitted { weights: Vector, bias: f64 },
}

/// Ordinary least squares regression trained with full-batch gradient descent.
///
/// Every call to [`fit`](Self::fit) starts from zero weights and a zero bias and
/// runs exactly `n_iters` update steps; there is no early stopping, so the same
/// inputs always produce the same parameters.
///
/// `fit` needs `&mut self` while `predict` only needs `&self`, so a fitted model
/// can be shared across threads for prediction but cannot be refitted while
/// borrowed.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    params: GradientDescentParams,
    state: FitState,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            params: GradientDescentParams::default(),
            state: FitState::Unfitted,
        }
    }

    pub fn with_params(learning_rate: f64, n_iters: usize) -> Result<Self> {
        Self::from_params(GradientDescentParams::new(learning_rate, n_iters))
    }

    pub fn from_params(params: GradientDescentParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            state: FitState::Unfitted,
        })
    }

    pub fn params(&self) -> &GradientDescentParams {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, FitState::Fitted { .. })
    }

    /// Learned weight vector, `None` before the first successful `fit`.
    pub fn weights(&self) -> Option<&Vector> {
        match &self.state {
            FitState::Fitted { weights, .. } => Some(weights),
            FitState::Unfitted => None,
        }
    }

    pub fn bias(&self) -> Option<f64> {
        match self.state {
            FitState::Fitted { bias, .. } => Some(bias),
            FitState::Unfitted => None,
        }
    }

    /// Fits weights and bias to `x` (n_samples x n_features) and `y` (n_samples).
    ///
    /// Any previously learned parameters are discarded. On error the model is
    /// left as it was.
    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(ModelError::shape(format!(
                "X has {} samples but y has {}",
                x.nrows(),
                y.len()
            )));
        }

        if x.nrows() == 0 {
            return Err(ModelError::shape("X must have at least one sample"));
        }

        if x.ncols() == 0 {
            return Err(ModelError::shape("X must have at least one feature"));
        }

        debug!(
            "fitting linear regression on {} samples x {} features (learning_rate={}, n_iters={})",
            x.nrows(),
            x.ncols(),
            self.params.learning_rate,
            self.params.n_iters
        );

        let (weights, bias) = self.gradient_descent(x, y);

        if log_enabled!(Level::Debug) {
            let y_pred = x.dot(&weights) + bias;
            if let Ok(mse) = metrics::mean_squared_error(y, &y_pred) {
                debug!("finished gradient descent, training mse={:.6}", mse);
            }
        }

        self.state = FitState::Fitted { weights, bias };
        Ok(())
    }

    pub fn fit_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        self.fit(&dataset.features, &dataset.labels)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let FitState::Fitted { weights, bias } = &self.state else {
            return Err(ModelError::NotFitted);
        };

        if x.ncols() != weights.len() {
            return Err(ModelError::shape(format!(
                "Number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                weights.len()
            )));
        }

        trace!("predicting {} samples", x.nrows());
        Ok(x.dot(weights) + *bias)
    }

    /// Coefficient of determination of the predictions on `x` against `y`.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        metrics::r2_score(y, &y_pred)
    }

    fn gradient_descent(&self, x: &Matrix, y: &Vector) -> (Vector, f64) {
        let scale = 1.0 / x.nrows() as f64;
        let learning_rate = self.params.learning_rate;

        let mut weights = Vector::zeros(x.ncols());
        let mut bias = 0.0;

        for _ in 0..self.params.n_iters {
            let y_pred = x.dot(&weights) + bias;
            let residuals = y_pred - y;

            let dw = x.t().dot(&residuals) * scale;
            let db = residuals.sum() * scale;

            weights.scaled_add(-learning_rate, &dw);
            bias -= learning_rate * db;
        }

        (weights, bias)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
