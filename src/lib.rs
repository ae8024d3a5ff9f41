//! Symbolic expression graphs
//!
//! Expressions are nodes of a shared DAG. Nodes are simplified as they are
//! built, evaluated lazily on every request, differentiated exactly, and
//! rendered with the minimum of parentheses.
//!
//! # Features
//! - Constants, independent variables and derived nodes over `+ - * / ^`,
//!   unary minus, `exp`, `log` and the six trigonometric functions
//! - Construction-time identities (`x + 0`, `x * 1`, `0 / x`, constant folding, ...)
//! - Rebinding of independent variables with live propagation to every dependent node
//! - Exact differentiation by node identity, including user-defined functions
//! - Truncated Taylor series by repeated differentiation
//!
//! # Usage
//!
//! ```
//! use symb_graph::{Expr, log};
//!
//! let x = Expr::independent("x");
//! let y = Expr::independent("y");
//! let z = log(&x * &y);
//!
//! x.assign(3.0).unwrap();
//! y.assign(4.0).unwrap();
//!
//! let dz = z.derivative(&x).unwrap();
//! assert_eq!(dz.to_string(), "y/(xy)");
//! assert!((dz.value().unwrap() - 1.0 / 3.0).abs() < 1e-12);
//! ```

mod core;
mod diff;
pub mod functions;
mod helpers;
mod ops;
mod series;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use crate::core::{Expr, ExprError, ExprKind, Operation, Role, Variable};
pub use functions::{Builtin, CustomDerivativeFn, CustomEvalFn, CustomFn, Function};
pub use helpers::{add, cos, cot, csc, div, exp, log, minus, mul, pow, sec, sin, sub, tan};
pub use series::{DEFAULT_MAX_NODES, DEFAULT_TAYLOR_ORDER, Taylor};

/// Taylor expansion of `f` in `x` around `a` with `n` terms
///
/// Leaves `x` bound to `a`. See [`Taylor`] for the node limit and for
/// extracting bare coefficients.
///
/// # Example
/// ```
/// use symb_graph::{Expr, taylor};
///
/// let x = Expr::independent("x");
/// let series = taylor(&x.exp(), &x, 0.0, 5).unwrap();
///
/// x.assign(1.0).unwrap();
/// let error = (series.value().unwrap() - std::f64::consts::E).abs();
/// assert!(error < std::f64::consts::E / 120.0);
/// ```
pub fn taylor(f: &Expr, x: &Expr, a: f64, n: usize) -> Result<Expr, ExprError> {
    Taylor::new().center(a).order(n).expand(f, x)
}
