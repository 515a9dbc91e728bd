use super::*;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = add_op(&a, &b);
    assert_eq!(c.data(), 5.0);
    assert_eq!(c.operation(), Some(Operation::Add));
    assert_eq!(c.operands().len(), 2);
    assert!(c.operands()[0].ptr_eq(&a));
    assert!(c.operands()[1].ptr_eq(&b));
}

#[test]
fn test_add_backward() -> Result<(), GradError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = add_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), GradError> {
    // c = a + a, dc/da = 2
    let a = Value::new(3.0);
    let c = &a + &a;
    assert_eq!(c.data(), 6.0);
    c.backward()?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_scalar_lifting() -> Result<(), GradError> {
    let a = Value::new(1.5);
    let left = &a + 2.0;
    let right = 2.0 + &a;
    assert_relative_eq!(left.data(), 3.5);
    assert_relative_eq!(right.data(), 3.5);
    right.backward()?;
    assert_eq!(a.grad(), 1.0);
    // The literal was lifted into its own leaf.
    assert!(right.operands()[0].is_leaf());
    assert_eq!(right.operands()[0].data(), 2.0);
    Ok(())
}

#[test]
fn test_sum_op_many_operands() -> Result<(), GradError> {
    let xs: Vec<Value> = (1..=4).map(|i| Value::new(i as f64)).collect();
    let s = sum_op(&xs)?;
    assert_eq!(s.data(), 10.0);
    assert_eq!(s.operands().len(), 4);
    s.backward_with(crate::BackwardOptions::new().upstream_grad(0.5))?;
    for x in &xs {
        assert_eq!(x.grad(), 0.5);
    }
    Ok(())
}

#[test]
fn test_sum_op_empty() {
    let result = sum_op(&[]);
    assert!(matches!(result, Err(GradError::EmptyOperands { .. })));
}

#[test]
fn test_iterator_sum() {
    let xs = vec![Value::new(1.0), Value::new(2.0)];
    let total: Value = xs.iter().sum();
    assert_eq!(total.data(), 3.0);
    let empty: Value = Vec::<Value>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
    assert!(empty.is_leaf());
}
