//! Operator overloading and method-style builders for `Expr`
//!
//! `+`, `-`, `*` and unary `-` route through the simplifying constructors, so
//! `x * 1.0` is `x` and `2.0 * 3.0` never allocates a derived node. Division is
//! fallible (a constant zero divisor is rejected) and is only offered as
//! [`Expr::div_by`], never as `/`.

use std::ops::{Add, Mul, Neg, Sub};

use crate::functions::{Builtin, Function};
use crate::{Expr, ExprError};

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::constant(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::constant(f64::from(n))
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

// ============================================================================
// Function methods
// ============================================================================

macro_rules! impl_builtin_methods {
    ($($fn_name:ident => $builtin:expr),* $(,)?) => {
        impl Expr {
            $(
                pub fn $fn_name(&self) -> Expr {
                    Expr::call($builtin, self)
                }
            )*
        }
    };
}

impl_builtin_methods!(
    exp => Builtin::Exp, log => Builtin::Log,
    sin => Builtin::Sin, cos => Builtin::Cos, tan => Builtin::Tan,
    csc => Builtin::Csc, sec => Builtin::Sec, cot => Builtin::Cot,
);

impl Expr {
    /// `self ^ exponent`
    pub fn pow_of(&self, exponent: impl Into<Expr>) -> Expr {
        Expr::pow(self, exponent)
    }

    /// `self / divisor`
    ///
    /// # Errors
    /// `DivisionByZero` when `divisor` is the constant zero.
    pub fn div_by(&self, divisor: impl Into<Expr>) -> Result<Expr, ExprError> {
        Expr::div_expr(self, divisor)
    }

    /// Apply a built-in or user-defined function to this expression
    pub fn apply(&self, func: impl Into<Function>) -> Expr {
        Expr::call(func, self)
    }
}

// ============================================================================
// Operator overloading
// ============================================================================

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::add_expr(self, rhs)
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sub_expr(self, rhs)
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::mul_expr(self, rhs)
            }
        }
    };
}

impl_binary_ops!(Expr, Expr);
impl_binary_ops!(Expr, &Expr);
impl_binary_ops!(Expr, f64);
impl_binary_ops!(&Expr, &Expr);
impl_binary_ops!(&Expr, Expr);
impl_binary_ops!(&Expr, f64);

// f64 on left side
impl_binary_ops!(f64, Expr);
impl_binary_ops!(f64, &Expr);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::minus(self)
    }
}

impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::minus(self)
    }
}
