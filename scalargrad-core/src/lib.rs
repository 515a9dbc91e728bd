//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over a dynamically built graph of scalars.
//!
//! Every operation on a [`Value`] eagerly computes its result and records a new node that
//! knows its operands and how to push a gradient back to them. Calling
//! [`Value::backward`] on any node walks the reachable graph in reverse-topological order
//! and accumulates `d(root)/d(node)` into every ancestor.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(3.0);
//! let c = &a + &b;
//! let d = &a * &c;
//! d.backward().unwrap();
//! assert_eq!(a.grad(), 7.0); // c + a
//! assert_eq!(b.grad(), 2.0); // a
//! ```

pub mod autograd;
pub mod error;
pub mod flops;
pub mod ops;
pub mod value;
pub mod value_data;

pub use autograd::BackwardOptions;
pub use error::GradError;
pub use ops::Operation;
pub use value::Value;

// Re-export traits required by public functions/structs
pub use num_traits;
pub use num_traits::Pow;
