// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::ops::Operation;
use crate::value::Value;
use num_traits::Pow;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for `base ^ exponent`.
///
/// * `d/d(base)     = exponent * base^(exponent - 1)`
/// * `d/d(exponent) = base^exponent * ln(base)`
///
/// The exponent term only exists for `base > 0`. The base term is a singularity for
/// `base == 0` with `exponent < 1`. Undefined terms are skipped, not propagated as
/// NaN or infinity.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: Value,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>> {
        let base = self.base.data();
        let exponent = self.exponent.data();

        let base_grad = if base == 0.0 && exponent < 1.0 {
            log::warn!(
                "pow backward: d/d(base) of 0^{} is singular; skipping the base gradient",
                exponent
            );
            None
        } else {
            Some(grad_output * exponent * base.powf(exponent - 1.0))
        };

        let exponent_grad = if base > 0.0 {
            Some(grad_output * base.powf(exponent) * base.ln())
        } else {
            log::debug!(
                "pow backward: ln({}) is undefined; skipping the exponent gradient",
                base
            );
            None
        };

        vec![base_grad, exponent_grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone(), self.exponent.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to the power `exponent`. Operand order matters: the result's operands
/// are `[base, exponent]`.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    let data = base.data().powf(exponent.data());
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent: exponent.clone(),
    };
    Value::from_op(data, Operation::Pow, Rc::new(grad_fn))
}

// --- num_traits::Pow for `x.pow(..)` ---

macro_rules! impl_pow_literal {
    ($rhs:ty) => {
        impl Pow<$rhs> for &Value {
            type Output = Value;

            fn pow(self, exponent: $rhs) -> Value {
                pow_op(self, &Value::from(exponent))
            }
        }

        impl Pow<$rhs> for Value {
            type Output = Value;

            fn pow(self, exponent: $rhs) -> Value {
                pow_op(&self, &Value::from(exponent))
            }
        }
    };
}

impl_pow_literal!(f64);
impl_pow_literal!(i32);

impl<'b> Pow<&'b Value> for &Value {
    type Output = Value;

    fn pow(self, exponent: &'b Value) -> Value {
        pow_op(self, exponent)
    }
}

impl Pow<Value> for Value {
    type Output = Value;

    fn pow(self, exponent: Value) -> Value {
        pow_op(&self, &exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
