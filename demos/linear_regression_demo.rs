use lineargd::dataset::make_linear;
use lineargd::{LinearRegression, metrics};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gradient Descent Linear Regression ===\n");

    // y = 3*x1 - 1.5*x2 + 2 + noise
    let true_weights = array![3.0, -1.5];
    let dataset = make_linear(200, &true_weights, 2.0, (0.0, 5.0), 0.25, 42)?;
    println!(
        "Dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let (train_data, test_data) = dataset.train_test_split(0.2)?;

    let mut model = LinearRegression::with_params(0.01, 5000)?;
    model.fit_dataset(&train_data)?;

    let test_predictions = model.predict(&test_data.features)?;

    println!("Results:");
    let train_score = model.score(&train_data.features, &train_data.labels)?;
    let test_score = model.score(&test_data.features, &test_data.labels)?;
    let test_mse = metrics::mean_squared_error(&test_data.labels, &test_predictions)?;
    let test_mae = metrics::mean_absolute_error(&test_data.labels, &test_predictions)?;

    println!("  Training R² score: {:.4}", train_score);
    println!("  Test R² score: {:.4}", test_score);
    println!("  Test MSE: {:.4}", test_mse);
    println!("  Test MAE: {:.4}", test_mae);

    if let (Some(weights), Some(bias)) = (model.weights(), model.bias()) {
        println!("  Weights: {:?} (true {:?})", weights.to_vec(), true_weights.to_vec());
        println!("  Bias: {:.4} (true 2.0)", bias);
    }

    let new_x = array![[1.0, 1.0], [4.0, 0.5]];
    let new_predictions = model.predict(&new_x)?;
    println!("\nPredictions on new data:");
    for (row, pred) in new_x.rows().into_iter().zip(new_predictions.iter()) {
        println!("  X={:?}: Predicted y={:.2}", row.to_vec(), pred);
    }

    Ok(())
}
