//! Expression constructors.
//!
//! Every builder simplifies before it allocates: operands are coerced into
//! nodes, a fixed list of algebraic identities is tried in order, and only if
//! none applies is a new derived node created. There is no other
//! normalisation pass, so the identities below are the whole rule set.

use std::f64::consts;
use std::rc::Rc;

use super::{Expr, ExprKind, Operation, Variable};
use crate::core::error::ExprError;
use crate::functions::{Builtin, Function};

impl Expr {
    // -------------------------------------------------------------------------
    // Leaf constructors
    // -------------------------------------------------------------------------

    /// Create a numeric constant
    pub fn constant(value: f64) -> Self {
        Self::new(ExprKind::Constant { value, name: None })
    }

    /// Create a constant that renders as `name` instead of its numeric literal
    pub fn named_constant(value: f64, name: impl AsRef<str>) -> Self {
        Self::new(ExprKind::Constant {
            value,
            name: Some(Rc::from(name.as_ref())),
        })
    }

    /// Euler's number, rendered as `e`
    pub fn euler() -> Self {
        Self::named_constant(consts::E, "e")
    }

    /// π, rendered as `pi`
    pub fn pi() -> Self {
        Self::named_constant(consts::PI, "pi")
    }

    /// Create an unbound independent variable
    pub fn independent(name: impl AsRef<str>) -> Self {
        Self::new(ExprKind::Independent(Variable::new(name.as_ref())))
    }

    pub(crate) fn derived(op: Operation) -> Self {
        Self::new(ExprKind::Derived(op))
    }

    #[inline]
    pub(crate) fn zero() -> Self {
        Self::constant(0.0)
    }

    #[inline]
    pub(crate) fn one() -> Self {
        Self::constant(1.0)
    }

    // -------------------------------------------------------------------------
    // Arithmetic builders
    // -------------------------------------------------------------------------

    /// `a + b`
    pub fn add_expr(a: impl Into<Expr>, b: impl Into<Expr>) -> Self {
        let (a, b) = (a.into(), b.into());
        if let (Some(x), Some(y)) = (a.as_constant(), b.as_constant()) {
            Self::constant(x + y)
        } else if b.is_constant_value(0.0) {
            a
        } else if a.is_constant_value(0.0) {
            b
        } else {
            Self::derived(Operation::Add(a, b))
        }
    }

    /// `a - b`
    pub fn sub_expr(a: impl Into<Expr>, b: impl Into<Expr>) -> Self {
        let (a, b) = (a.into(), b.into());
        if let (Some(x), Some(y)) = (a.as_constant(), b.as_constant()) {
            Self::constant(x - y)
        } else if b.is_constant_value(0.0) {
            a
        } else if a.is_constant_value(0.0) {
            Self::minus(b)
        } else {
            Self::derived(Operation::Sub(a, b))
        }
    }

    /// `a * b`
    pub fn mul_expr(a: impl Into<Expr>, b: impl Into<Expr>) -> Self {
        let (a, b) = (a.into(), b.into());
        if let (Some(x), Some(y)) = (a.as_constant(), b.as_constant()) {
            Self::constant(x * y)
        } else if a.is_constant_value(0.0) || b.is_constant_value(0.0) {
            Self::zero()
        } else if a.is_constant_value(-1.0) {
            Self::minus(b)
        } else if b.is_constant_value(-1.0) {
            Self::minus(a)
        } else if b.is_constant_value(1.0) {
            a
        } else if a.is_constant_value(1.0) {
            b
        } else {
            Self::derived(Operation::Mul(a, b))
        }
    }

    /// `a / b`
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is the constant zero. The check happens here,
    /// before any value is requested.
    pub fn div_expr(a: impl Into<Expr>, b: impl Into<Expr>) -> Result<Self, ExprError> {
        let (a, b) = (a.into(), b.into());
        if b.is_constant_value(0.0) {
            return Err(ExprError::division_by_zero(a.render()));
        }
        let quotient = if let (Some(x), Some(y)) = (a.as_constant(), b.as_constant()) {
            Self::constant(x / y)
        } else if a.is_constant_value(0.0) {
            Self::zero()
        } else if b.is_constant_value(1.0) {
            a
        } else {
            Self::derived(Operation::Div(a, b))
        };
        Ok(quotient)
    }

    /// `base ^ exponent`
    ///
    /// A constant base equal to Euler's number is rewritten to `exp(exponent)`.
    pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Self {
        let (a, b) = (base.into(), exponent.into());
        if let (Some(x), Some(y)) = (a.as_constant(), b.as_constant()) {
            Self::constant(x.powf(y))
        } else if a.is_constant_value(1.0) {
            Self::one()
        } else if a.is_constant_value(0.0) {
            Self::zero()
        } else if a.is_constant_value(consts::E) {
            Self::call(Function::Builtin(Builtin::Exp), b)
        } else {
            Self::derived(Operation::Pow(a, b))
        }
    }

    /// Unary minus
    pub fn minus(a: impl Into<Expr>) -> Self {
        let a = a.into();
        match a.as_constant() {
            Some(x) => Self::constant(-x),
            None => Self::derived(Operation::Neg(a)),
        }
    }

    /// Apply a function, folding immediately when the argument is constant
    pub fn call(func: impl Into<Function>, arg: impl Into<Expr>) -> Self {
        let (func, arg) = (func.into(), arg.into());
        match arg.as_constant() {
            Some(x) => Self::constant(func.eval(x)),
            None => Self::derived(Operation::Call(func, arg)),
        }
    }
}
