use crate::error::GradError;
use crate::ops::arithmetic::{product_op, sum_op};
use crate::value::Value;
use std::iter::{Product, Sum};
use std::str::FromStr;

// --- Lifting bare numbers into leaves ---

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

/// Parses a textual operand into a leaf.
///
/// Non-numeric text and non-finite numbers (`"NaN"`, `"inf"`) are rejected rather than
/// coerced.
impl FromStr for Value {
    type Err = GradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: f64 = s.trim().parse().map_err(|e| GradError::InvalidOperand {
            operation: "parse".to_string(),
            reason: format!("{:?} is not a number ({})", s, e),
        })?;
        Value::try_new(data)
    }
}

// --- Iterator folds ---

/// Sums into a single n-ary addition node. An empty iterator yields a leaf holding 0.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        let operands: Vec<Value> = iter.collect();
        sum_op(&operands).unwrap_or_else(|_| Value::new(0.0))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

/// Multiplies into a single n-ary multiplication node. An empty iterator yields a leaf
/// holding 1.
impl Product for Value {
    fn product<I: Iterator<Item = Value>>(iter: I) -> Self {
        let operands: Vec<Value> = iter.collect();
        product_op(&operands).unwrap_or_else(|_| Value::new(1.0))
    }
}

impl<'a> Product<&'a Value> for Value {
    fn product<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().product()
    }
}
