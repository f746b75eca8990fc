use crate::Vector;
use crate::error::{ModelError, Result};

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::shape(format!(
            "y_true has {} entries but y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }

    if y_true.is_empty() {
        return Err(ModelError::shape("metrics need at least one sample"));
    }

    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / diff.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / diff.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // constant targets
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 5.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(mse, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, -2.0, 3.0, 0.0];
        let y_pred = array![2.0, -2.0, 1.0, 0.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(mae, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(r2, 1.0, epsilon = 1e-12);

        let mean_only = array![2.5, 2.5, 2.5, 2.5];
        let r2 = r2_score(&y_true, &mean_only).unwrap();
        assert_abs_diff_eq!(r2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_constant_targets() {
        let y = array![3.0, 3.0];
        assert_eq!(r2_score(&y, &array![1.0, 5.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = mean_squared_error(&array![1.0, 2.0], &array![1.0]).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch(_)));
    }

    #[test]
    fn test_empty_input() {
        let empty = Vector::zeros(0);
        assert!(r2_score(&empty, &empty).is_err());
        assert!(mean_absolute_error(&empty, &empty).is_err());
    }
}
