//! Evaluation and differentiation rules for the built-in functions
//!
//! Each rule receives the argument `u` and its already computed derivative
//! `u'`, and builds the result through the simplifying constructors.

use super::Builtin;
use crate::{Expr, ExprError};

/// Evaluation and derivative rule of a built-in function
#[derive(Clone, Copy)]
pub(crate) struct FunctionDefinition {
    /// Name used when rendering (e.g. "sin")
    pub name: &'static str,

    /// Numerical evaluation function
    pub eval: fn(f64) -> f64,

    /// Symbolic differentiation function
    /// Arguments: (argument of the call, derivative of the argument)
    pub derivative: fn(&Expr, Expr) -> Result<Expr, ExprError>,
}

fn squared_call(f: Builtin, u: &Expr) -> Expr {
    Expr::pow(Expr::call(f, u), 2.0)
}

impl Builtin {
    pub(crate) fn definition(self) -> FunctionDefinition {
        match self {
            Builtin::Exp => FunctionDefinition {
                name: "exp",
                eval: f64::exp,
                // d/dx exp(u) = u' * exp(u)
                derivative: |u, du| Ok(Expr::mul_expr(du, Expr::call(Builtin::Exp, u))),
            },
            Builtin::Log => FunctionDefinition {
                name: "log",
                eval: f64::ln,
                // d/dx log(u) = u' / u
                derivative: |u, du| Expr::div_expr(du, u),
            },
            Builtin::Sin => FunctionDefinition {
                name: "sin",
                eval: f64::sin,
                // d/dx sin(u) = u' * cos(u)
                derivative: |u, du| Ok(Expr::mul_expr(du, Expr::call(Builtin::Cos, u))),
            },
            Builtin::Cos => FunctionDefinition {
                name: "cos",
                eval: f64::cos,
                // d/dx cos(u) = -u' * sin(u)
                derivative: |u, du| {
                    Ok(Expr::mul_expr(
                        Expr::minus(du),
                        Expr::call(Builtin::Sin, u),
                    ))
                },
            },
            Builtin::Tan => FunctionDefinition {
                name: "tan",
                eval: f64::tan,
                // d/dx tan(u) = u' * sec(u)^2
                derivative: |u, du| Ok(Expr::mul_expr(du, squared_call(Builtin::Sec, u))),
            },
            Builtin::Csc => FunctionDefinition {
                name: "csc",
                eval: |x| 1.0 / x.sin(),
                // d/dx csc(u) = -u' * (csc(u) * cot(u))
                derivative: |u, du| {
                    Ok(Expr::mul_expr(
                        Expr::minus(du),
                        Expr::mul_expr(Expr::call(Builtin::Csc, u), Expr::call(Builtin::Cot, u)),
                    ))
                },
            },
            Builtin::Sec => FunctionDefinition {
                name: "sec",
                eval: |x| 1.0 / x.cos(),
                // d/dx sec(u) = u' * (sec(u) * tan(u))
                derivative: |u, du| {
                    Ok(Expr::mul_expr(
                        du,
                        Expr::mul_expr(Expr::call(Builtin::Sec, u), Expr::call(Builtin::Tan, u)),
                    ))
                },
            },
            Builtin::Cot => FunctionDefinition {
                name: "cot",
                eval: |x| x.cos() / x.sin(),
                // d/dx cot(u) = -u' * csc(u)^2
                derivative: |u, du| {
                    Ok(Expr::mul_expr(
                        Expr::minus(du),
                        squared_call(Builtin::Csc, u),
                    ))
                },
            },
        }
    }
}
