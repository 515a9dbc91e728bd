use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node in the computation graph.
///
/// The address of the shared `RefCell<ValueData>` allocation. Stable for as long as any
/// handle to the node is alive, and identical across clones of the same [`Value`].
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Sorts every node reachable from `root` in reverse-topological order.
///
/// The returned list starts with `root` and places each node after every node that uses it
/// as an operand, so by the time a node's backward rule runs all of its consumers have
/// already pushed their contributions into its gradient. This holds for diamond-shaped
/// graphs too, where a node is reachable from several parents at different depths.
///
/// Implemented as an iterative post-order DFS (operands before the node), reversed.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut post_order: Vec<Value> = Vec::new();
    // (node, operands_already_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            post_order.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are visited in their stored order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} reachable nodes", post_order.len());
    post_order.reverse();
    post_order
}

/// Collects every node reachable from `root` exactly once, in no particular order.
pub(crate) fn reachable_nodes(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.node_id()) {
            continue;
        }
        stack.extend(node.operands());
        nodes.push(node);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|v| v.ptr_eq(node))
            .expect("node missing from order")
    }

    #[test]
    fn test_leaf_sorts_to_itself() {
        let a = Value::new(1.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert!(order[0].ptr_eq(&a));
    }

    #[test]
    fn test_every_consumer_precedes_its_operands() {
        // Diamond: a feeds c and d at different depths, both feed f.
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a + &b;
        let d = &a * &c;
        let e = &d + &b;
        let f = &e * &c;

        let order = topological_sort(&f);
        assert_eq!(order.len(), 6);
        assert!(order[0].ptr_eq(&f));
        for node in &order {
            for operand in node.operands() {
                assert!(
                    position(&order, node) < position(&order, &operand),
                    "{} must come before its operand {}",
                    node,
                    operand
                );
            }
        }
    }

    #[test]
    fn test_shared_operand_is_listed_once() {
        let a = Value::new(3.0);
        let b = &a * &a;
        let c = &b + &a;
        let order = topological_sort(&c);
        assert_eq!(order.len(), 3);
        assert_eq!(reachable_nodes(&c).len(), 3);
    }

    #[test]
    fn test_deep_chain() {
        let mut acc = Value::new(0.0);
        for _ in 0..2_000 {
            acc = &acc + 1.0;
        }
        // Each step adds a sum node and a lifted literal leaf.
        assert_eq!(topological_sort(&acc).len(), 4_001);
    }
}
