//! # Building and differentiating an expression graph
//!
//! Builds `f = (a + b + a*b)^2`, runs a full backward pass, restricts a second pass to a
//! single input, and prints the FLOP count of the forward pass.
//!
//! Run with `RUST_LOG=debug cargo run --example expression_graph` to see the traversal logs.

use scalargrad_core::{BackwardOptions, GradError, Value};

fn main() -> Result<(), GradError> {
    env_logger::init();

    let a: Value = "2".parse()?;
    let b = Value::new(3.0);
    let c = &a + &b;
    let d = &a * &b;
    let e = &c + &d;
    let f = &e * &e;

    f.backward()?;
    println!("f = {}", f);
    println!("a = {}", a);
    println!("b = {}", b);

    f.reset_grad(true);
    f.backward_with(BackwardOptions::new().with_respect_to(&b))?;
    println!("only b: a.grad = {}, b.grad = {}", a.grad(), b.grad());

    println!("forward FLOPs: {}", f.calculate_inference_flops());
    Ok(())
}
