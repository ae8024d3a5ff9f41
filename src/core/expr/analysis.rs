//! Structural queries over the expression DAG.
//!
//! Shared subexpressions are visited once, so these stay linear in the number
//! of distinct nodes even when repeated differentiation produces heavy sharing.

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Expr, ExprKind};

impl Expr {
    /// Number of distinct nodes reachable through operands.
    ///
    /// Bindings are not followed: they are values, not structure.
    pub fn node_count(&self) -> usize {
        let mut seen = FxHashSet::default();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !seen.insert(node.id()) {
                continue;
            }
            if let ExprKind::Derived(op) = node.kind() {
                stack.extend(op.operands());
            }
        }
        seen.len()
    }

    /// Longest operand path from this node to a leaf, counting both ends
    pub fn depth(&self) -> usize {
        fn visit(expr: &Expr, memo: &mut FxHashMap<u64, usize>) -> usize {
            if let Some(&d) = memo.get(&expr.id()) {
                return d;
            }
            let d = match expr.kind() {
                ExprKind::Derived(op) => {
                    1 + op.operands().map(|e| visit(e, memo)).max().unwrap_or(0)
                }
                _ => 1,
            };
            memo.insert(expr.id(), d);
            d
        }
        visit(self, &mut FxHashMap::default())
    }

    /// True when evaluating `self` can reach `var`, through operands or bindings
    pub fn depends_on(&self, var: &Expr) -> bool {
        let mut seen = FxHashSet::default();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            if node.same_node(var) {
                return true;
            }
            if !seen.insert(node.id()) {
                continue;
            }
            match node.kind() {
                ExprKind::Derived(op) => stack.extend(op.operands().cloned()),
                ExprKind::Independent(var) => stack.extend(var.binding()),
                ExprKind::Constant { .. } => {}
            }
        }
        false
    }
}
