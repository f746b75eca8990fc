//! Hyperparameters for gradient descent training.

use crate::error::{ModelError, Result};

/// Step size and iteration budget for batch gradient descent.
///
/// Use struct construction with `..Default::default()` or the `with_*`
/// setters, then pass the result to [`LinearRegression::from_params`].
///
/// ```
/// use lineargd::{GradientDescentParams, LinearRegression};
///
/// let params = GradientDescentParams::default().with_learning_rate(0.01);
/// let model = LinearRegression::from_params(params).unwrap();
/// assert_eq!(model.params().n_iters, 1000);
/// ```
///
/// [`LinearRegression::from_params`]: crate::LinearRegression::from_params
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientDescentParams {
    /// Multiplier applied to each gradient before it is subtracted.
    pub learning_rate: f64,
    /// Number of full-batch update steps; always run to completion.
    pub n_iters: usize,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            n_iters: 1000,
        }
    }
}

impl GradientDescentParams {
    pub fn new(learning_rate: f64, n_iters: usize) -> Self {
        Self {
            learning_rate,
            n_iters,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_n_iters(mut self, n_iters: usize) -> Self {
        self.n_iters = n_iters;
        self
    }

    /// Rejects non-finite or non-positive learning rates and a zero
    /// iteration count.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ModelError::hyperparameter(
                "learning_rate",
                format!("must be a finite positive number, got {}", self.learning_rate),
            ));
        }

        if self.n_iters == 0 {
            return Err(ModelError::hyperparameter("n_iters", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GradientDescentParams::default();
        assert_eq!(params.learning_rate, 0.001);
        assert_eq!(params.n_iters, 1000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let params = GradientDescentParams::default()
            .with_learning_rate(0.1)
            .with_n_iters(2000);
        assert_eq!(params, GradientDescentParams::new(0.1, 2000));
    }

    #[test]
    fn test_rejects_bad_learning_rate() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = GradientDescentParams::new(lr, 10).validate().unwrap_err();
            assert!(matches!(
                err,
                ModelError::InvalidHyperparameter { name: "learning_rate", .. }
            ));
        }
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = GradientDescentParams::new(0.01, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidHyperparameter { name: "n_iters", .. }
        ));
    }
}
