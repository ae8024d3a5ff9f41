//! Differentiation engine - applies calculus rules
//!
//! Every rule builds its result through the simplifying constructors, so the
//! `0 * u`, `1 * u` and `u + 0` terms that the product and chain rules produce
//! collapse immediately instead of accumulating over repeated differentiation.
//! Nothing beyond those construction-time identities is attempted.
//!
//! Differentiation recurses once per level of graph depth, so very deep
//! chains (tens of thousands of nested nodes) can exhaust the call stack.

use crate::core::expr::{Expr, ExprKind, Operation};
use crate::core::error::ExprError;
use crate::functions::Builtin;

impl Expr {
    /// Differentiate this expression with respect to the variable `wrt`.
    ///
    /// `wrt` is matched by node identity. An unbound independent other than
    /// `wrt` is treated as independent of it and differentiates to 0; a bound
    /// independent differentiates as its binding. The receiver is never
    /// modified; the result is a new expression.
    ///
    /// # Errors
    /// - `DifferentiateByConstant` if `wrt` is a constant node
    /// - `NotDifferentiable` if a user-defined function without a derivative rule is reached
    /// - `DivisionByZero` if a rule builds a quotient by the constant zero
    ///
    /// # Example
    /// ```
    /// use symb_graph::Expr;
    ///
    /// let x = Expr::independent("x");
    /// let y = Expr::mul_expr(&x, &x);
    /// let dy = y.derivative(&x).unwrap();
    ///
    /// x.assign(3.0).unwrap();
    /// assert_eq!(dy.value().unwrap(), 6.0);
    /// ```
    pub fn derivative(&self, wrt: &Expr) -> Result<Expr, ExprError> {
        if let ExprKind::Constant { .. } = wrt.kind() {
            return Err(ExprError::DifferentiateByConstant {
                constant: wrt.render(),
            });
        }
        match self.kind() {
            ExprKind::Constant { .. } => Ok(Expr::zero()),
            _ if self.same_node(wrt) => Ok(Expr::one()),
            ExprKind::Independent(_) => match self.binding() {
                Some(target) => target.derivative(wrt),
                None => Ok(Expr::zero()),
            },
            ExprKind::Derived(op) => op.derive(self, wrt),
        }
    }

    /// Differentiate `order` times with respect to `wrt`; order 0 returns `self`
    pub fn nth_derivative(&self, wrt: &Expr, order: usize) -> Result<Expr, ExprError> {
        let mut result = self.clone();
        for _ in 0..order {
            result = result.derivative(wrt)?;
        }
        Ok(result)
    }
}

impl Operation {
    /// Apply the rule for this operation; `node` is the derived node holding it
    fn derive(&self, node: &Expr, wrt: &Expr) -> Result<Expr, ExprError> {
        match self {
            // Sum rule: (u + v)' = u' + v'
            Operation::Add(u, v) => Ok(Expr::add_expr(u.derivative(wrt)?, v.derivative(wrt)?)),

            // Difference rule: (u - v)' = u' - v'
            Operation::Sub(u, v) => Ok(Expr::sub_expr(u.derivative(wrt)?, v.derivative(wrt)?)),

            // Product rule: (u * v)' = u' * v + u * v'
            Operation::Mul(u, v) => Ok(Expr::add_expr(
                Expr::mul_expr(u.derivative(wrt)?, v),
                Expr::mul_expr(u, v.derivative(wrt)?),
            )),

            // Quotient rule: (u / v)' = (u' * v - u * v') / v^2
            Operation::Div(u, v) => {
                let numerator = Expr::sub_expr(
                    Expr::mul_expr(u.derivative(wrt)?, v),
                    Expr::mul_expr(u, v.derivative(wrt)?),
                );
                Expr::div_expr(numerator, Expr::pow(v, 2.0))
            }

            // Generalized power rule, variable base and exponent:
            // (a^b)' = a' * (b * a^(b-1)) + b' * (log(a) * a^b)
            Operation::Pow(a, b) => {
                let base_term = Expr::mul_expr(
                    a.derivative(wrt)?,
                    Expr::mul_expr(b, Expr::pow(a, Expr::sub_expr(b, 1.0))),
                );
                let exponent_term = Expr::mul_expr(
                    b.derivative(wrt)?,
                    Expr::mul_expr(Expr::call(Builtin::Log, a), node),
                );
                Ok(Expr::add_expr(base_term, exponent_term))
            }

            Operation::Neg(u) => Ok(Expr::minus(u.derivative(wrt)?)),

            // Chain rule: f(u)' = f'(u) * u'
            Operation::Call(func, u) => func.derivative(u, u.derivative(wrt)?),
        }
    }
}
