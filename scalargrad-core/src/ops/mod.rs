//! Differentiable primitive operations.
//!
//! Each primitive lives in its own file with a fallible-free entry point (`*_op`), the
//! `BackwardOp` struct holding its local backward rule, and its `std::ops` overloads.

use std::fmt;

/// Tag identifying the primitive that produced a node.
///
/// The set is closed: subtraction, negation and division are built from these and never
/// appear as tags of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Mul,
    Pow,
    Tanh,
    Exp,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Mul => "*",
            Operation::Pow => "**",
            Operation::Tanh => "tanh",
            Operation::Exp => "exp",
        };
        f.write_str(symbol)
    }
}

/// Implements a `std::ops` binary operator for every combination of `Value`, `&Value` and
/// `f64` operands. Bare numbers are lifted into fresh leaves.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'a, 'b> std::ops::$trait<&'b $crate::value::Value> for &'a $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: &'b $crate::value::Value) -> Self::Output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> std::ops::$trait<&'b $crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: &'b $crate::value::Value) -> Self::Output {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> std::ops::$trait<$crate::value::Value> for &'a $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<f64> for &'a $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(&self, &$crate::value::Value::new(rhs))
            }
        }

        impl<'b> std::ops::$trait<&'b $crate::value::Value> for f64 {
            type Output = $crate::value::Value;

            fn $method(self, rhs: &'b $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for f64 {
            type Output = $crate::value::Value;

            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), &rhs)
            }
        }
    };
}

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, product_op, sub_op, sum_op};
pub use math_elem::exp_op;
