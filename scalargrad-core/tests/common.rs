use scalargrad_core::Value;

// Shared helpers for the integration tests.
// allow(dead_code): each test crate only uses part of this module.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}
