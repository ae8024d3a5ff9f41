//! Lazy numeric evaluation.
//!
//! Values are recomputed from the current bindings on every call.
//!
//! Evaluation runs on an explicit work stack in post-order, like a small stack
//! machine: operands push their values, and an operator pops its operands and
//! pushes the result. Graph depth is therefore bounded by heap, not by the
//! call stack.

use super::{Expr, ExprKind, Operation};
use crate::core::error::ExprError;

enum Step {
    /// Push the value of this node, scheduling operands first
    Visit(Expr),
    /// All operands are on the value stack; apply the operator
    Apply(Expr),
}

impl Expr {
    /// Numeric value of the expression under the current bindings.
    ///
    /// Floating-point semantics are native: dividing by a non-constant that
    /// evaluates to zero yields an infinity or NaN rather than an error.
    ///
    /// # Errors
    /// `UnboundValue` naming the first unbound independent reached, operands
    /// being visited left to right.
    pub fn value(&self) -> Result<f64, ExprError> {
        let mut work = vec![Step::Visit(self.clone())];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(node) => match node.kind() {
                    ExprKind::Constant { value, .. } => values.push(*value),
                    ExprKind::Independent(var) => match var.binding() {
                        Some(target) => work.push(Step::Visit(target)),
                        None => return Err(ExprError::unbound(var.name())),
                    },
                    ExprKind::Derived(op) => {
                        let operands: Vec<Expr> = op.operands().cloned().collect();
                        work.push(Step::Apply(node.clone()));
                        // Reversed so the first operand is evaluated first
                        work.extend(operands.into_iter().rev().map(Step::Visit));
                    }
                },
                Step::Apply(node) => {
                    if let ExprKind::Derived(op) = node.kind() {
                        let v = op.apply(&mut values);
                        values.push(v);
                    }
                }
            }
        }
        Ok(values.pop().unwrap_or(f64::NAN))
    }

    /// True when `value()` would succeed
    pub fn is_defined(&self) -> bool {
        self.value().is_ok()
    }

    pub fn is_undefined(&self) -> bool {
        !self.is_defined()
    }
}

fn pop(values: &mut Vec<f64>) -> f64 {
    values.pop().unwrap_or(f64::NAN)
}

impl Operation {
    /// Pop the operand values (last operand on top) and compute the result
    fn apply(&self, values: &mut Vec<f64>) -> f64 {
        match self {
            Operation::Neg(_) => -pop(values),
            Operation::Call(func, _) => func.eval(pop(values)),
            _ => {
                let b = pop(values);
                let a = pop(values);
                match self {
                    Operation::Add(..) => a + b,
                    Operation::Sub(..) => a - b,
                    Operation::Mul(..) => a * b,
                    Operation::Div(..) => a / b,
                    // 0^0 evaluates to 1.0 following IEEE 754 powf behavior
                    Operation::Pow(..) => a.powf(b),
                    Operation::Neg(_) | Operation::Call(..) => f64::NAN,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_value() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");
        let sum = Expr::add_expr(&x, &y);

        assert_eq!(x.value(), Err(ExprError::unbound("x")));
        assert!(sum.is_undefined());

        x.assign(1.0).unwrap();
        assert_eq!(sum.value(), Err(ExprError::unbound("y")));

        y.assign(2.0).unwrap();
        assert!(sum.is_defined());
        assert_eq!(sum.value().unwrap(), 3.0);
    }

    #[test]
    fn test_values_are_not_cached() {
        let x = Expr::independent("x");
        let y = Expr::mul_expr(&x, &x);

        x.assign(3.0).unwrap();
        assert_eq!(y.value().unwrap(), 9.0);

        x.assign(4.0).unwrap();
        assert_eq!(y.value().unwrap(), 16.0);
    }

    #[test]
    fn test_binding_is_a_live_link() {
        let x = Expr::independent("x");
        let t = Expr::independent("t");
        x.assign(Expr::mul_expr(2.0, &t)).unwrap();

        t.assign(1.5).unwrap();
        assert_eq!(x.value().unwrap(), 3.0);

        t.assign(-1.0).unwrap();
        assert_eq!(x.value().unwrap(), -2.0);
    }

    #[test]
    fn test_runtime_division_is_native() {
        let x = Expr::independent("x");
        let q = Expr::div_expr(1.0, &x).unwrap();
        x.assign(0.0).unwrap();
        assert!(q.value().unwrap().is_infinite());
    }

    #[test]
    fn test_deep_chain_evaluates() {
        let x = Expr::independent("x");
        let mut chain = x.clone();
        for _ in 0..100_000 {
            chain = Expr::add_expr(&chain, &x);
        }
        x.assign(1.0).unwrap();
        assert_eq!(chain.value().unwrap(), 100_001.0);
    }

    #[test]
    fn test_operand_order() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");
        x.assign(8.0).unwrap();
        y.assign(2.0).unwrap();
        assert_eq!(Expr::sub_expr(&x, &y).value().unwrap(), 6.0);
        assert_eq!(Expr::div_expr(&x, &y).unwrap().value().unwrap(), 4.0);
        assert_eq!(Expr::pow(&x, &y).value().unwrap(), 64.0);
        assert_eq!(Expr::minus(Expr::sub_expr(&y, &x)).value().unwrap(), 6.0);
    }
}
