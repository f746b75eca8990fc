pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod params;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use linear_model::LinearRegression;
pub use params::GradientDescentParams;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
