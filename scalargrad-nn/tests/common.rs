// Shared helpers for the integration tests.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Four labelled points in three dimensions, targets in {-1, 1}.
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (vec![2.0, 3.0, -1.0], vec![1.0]),
        (vec![3.0, -1.0, 0.5], vec![-1.0]),
        (vec![0.5, 1.0, 1.0], vec![-1.0]),
        (vec![1.0, 1.0, -1.0], vec![1.0]),
    ]
}
