//! Free-function builders
//!
//! Thin wrappers over the simplifying constructors on [`Expr`], for code that
//! reads better as `mul(2.0, sin(&x))` than as method chains.

use crate::functions::Builtin;
use crate::{Expr, ExprError};

pub fn add(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    Expr::add_expr(a, b)
}

pub fn sub(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    Expr::sub_expr(a, b)
}

pub fn mul(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    Expr::mul_expr(a, b)
}

/// Fails with `DivisionByZero` when `b` is the constant zero
pub fn div(a: impl Into<Expr>, b: impl Into<Expr>) -> Result<Expr, ExprError> {
    Expr::div_expr(a, b)
}

pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Expr {
    Expr::pow(base, exponent)
}

pub fn minus(a: impl Into<Expr>) -> Expr {
    Expr::minus(a)
}

macro_rules! builtin_builders {
    ($($fn_name:ident => $builtin:expr),* $(,)?) => {
        $(
            pub fn $fn_name(a: impl Into<Expr>) -> Expr {
                Expr::call($builtin, a)
            }
        )*
    };
}

builtin_builders!(
    exp => Builtin::Exp, log => Builtin::Log,
    sin => Builtin::Sin, cos => Builtin::Cos, tan => Builtin::Tan,
    csc => Builtin::Csc, sec => Builtin::Sec, cot => Builtin::Cot,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_builders_match_methods() {
        let x = Expr::independent("x");
        assert_eq!(sin(&x).to_string(), x.sin().to_string());
        assert_eq!(mul(2.0, cot(&x)).to_string(), "2*cot(x)");
        assert_eq!(sub(0.0, &x).to_string(), "-x");
        assert_eq!(pow(&x, 2).to_string(), "x^2");
        assert!(div(&x, 0.0).is_err());

        // Constant arguments fold
        assert_eq!(exp(0.0).as_constant(), Some(1.0));
        assert_eq!(log(1.0).as_constant(), Some(0.0));
        assert_eq!(minus(add(1.0, 2.0)).as_constant(), Some(-3.0));
    }
}
