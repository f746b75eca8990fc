//! Linear models for regression.
//!
//! - `LinearRegression`: ordinary least squares fitted by batch gradient descent
//!
//! # Examples
//!
//! ```rust
//! use lineargd::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = LinearRegression::with_params(0.1, 2000).unwrap();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&array![[5.0]]).unwrap();
//! assert!((predictions[0] - 10.0).abs() < 0.5);
//! ```

mod linear_regression;

pub use linear_regression::LinearRegression;
