//! Forecast accuracy metrics and the holdout split used for tuning.

/// Mean Absolute Error. Lower is better; same scale as the data.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error. Penalizes large errors more heavily.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    (sum / actual.len() as f64).sqrt()
}

/// Mean Absolute Percentage Error, as a decimal. Zero actuals are skipped.
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| a.abs() > 1e-10)
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();

    sum / actual.len() as f64
}

/// Split a series into chronological train and test slices.
///
/// The test slice takes the trailing `test_ratio` fraction, at least one
/// point on each side when the input has two or more points.
pub fn train_test_split(data: &[f64], test_ratio: f64) -> (&[f64], &[f64]) {
    if data.len() < 2 {
        return (data, &[]);
    }

    let test_len = ((data.len() as f64 * test_ratio).round() as usize)
        .max(1)
        .min(data.len() - 1);
    data.split_at(data.len() - test_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mae() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 5.0];
        assert!((mae(&actual, &predicted) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rmse_penalizes_large_errors() {
        let actual = vec![0.0, 0.0];
        let small = vec![1.0, 1.0];
        let uneven = vec![0.0, 2.0];
        assert!(rmse(&actual, &uneven) > rmse(&actual, &small));
    }

    #[test]
    fn test_mape_skips_zero_actuals() {
        let actual = vec![0.0, 100.0];
        let predicted = vec![50.0, 110.0];
        let score = mape(&actual, &predicted);
        assert!(score.is_finite());
        assert!((score - 0.05).abs() < 1e-10);
    }

    #[test]
    fn test_mismatched_lengths_are_nan() {
        assert!(mae(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(rmse(&[], &[]).is_nan());
    }

    #[test]
    fn test_train_test_split_ratio() {
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let (train, test) = train_test_split(&data, 0.2);
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert_eq!(test[0], 8.0);
    }

    #[test]
    fn test_train_test_split_keeps_both_sides_nonempty() {
        let data = vec![1.0, 2.0];
        let (train, test) = train_test_split(&data, 0.9);
        assert_eq!(train.len(), 1);
        assert_eq!(test.len(), 1);
    }

    #[test]
    fn test_train_test_split_single_point() {
        let data = vec![1.0];
        let (train, test) = train_test_split(&data, 0.2);
        assert_eq!(train.len(), 1);
        assert!(test.is_empty());
    }
}
