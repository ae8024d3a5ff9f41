//! Functions applicable to a single expression argument.
//!
//! Built-in transcendental functions carry their numeric evaluator and
//! derivative rule in [`definitions`]. User-defined functions supply their own
//! evaluator and, optionally, the derivative of the outer function.

use std::fmt;
use std::rc::Rc;

use crate::{Expr, ExprError};

pub(crate) mod definitions;

/// Numeric evaluator of a user-defined function
pub type CustomEvalFn = Rc<dyn Fn(f64) -> f64>;

/// Outer derivative `f'(u)` of a user-defined function, given its argument `u`
pub type CustomDerivativeFn = Rc<dyn Fn(&Expr) -> Result<Expr, ExprError>>;

/// Built-in transcendental functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Exp,
    Log,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
}

/// A user-defined single-argument function.
///
/// # Example
/// ```
/// use symb_graph::{CustomFn, Expr};
///
/// let x = Expr::independent("x");
/// let cube = CustomFn::new("cube", |v| v * v * v)
///     .with_derivative(|u| Ok(Expr::mul_expr(3.0, Expr::pow(u, 2.0))));
/// let y = x.apply(&cube);
///
/// x.assign(2.0).unwrap();
/// assert_eq!(y.value().unwrap(), 8.0);
/// assert_eq!(y.derivative(&x).unwrap().value().unwrap(), 12.0);
/// ```
#[derive(Clone)]
pub struct CustomFn {
    name: Rc<str>,
    eval: CustomEvalFn,
    derivative: Option<CustomDerivativeFn>,
}

impl CustomFn {
    /// A function with an evaluator and no derivative rule
    pub fn new(name: impl AsRef<str>, eval: impl Fn(f64) -> f64 + 'static) -> Self {
        CustomFn {
            name: Rc::from(name.as_ref()),
            eval: Rc::new(eval),
            derivative: None,
        }
    }

    /// Attach the outer derivative `f'(u)`; the chain rule factor `u'` is applied by the engine
    pub fn with_derivative(
        mut self,
        derivative: impl Fn(&Expr) -> Result<Expr, ExprError> + 'static,
    ) -> Self {
        self.derivative = Some(Rc::new(derivative));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_differentiable(&self) -> bool {
        self.derivative.is_some()
    }
}

impl fmt::Debug for CustomFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFn")
            .field("name", &self.name)
            .field("differentiable", &self.is_differentiable())
            .finish()
    }
}

/// A function that can head a derived node
#[derive(Debug, Clone)]
pub enum Function {
    Builtin(Builtin),
    Custom(Rc<CustomFn>),
}

impl Function {
    pub fn name(&self) -> &str {
        match self {
            Function::Builtin(b) => b.definition().name,
            Function::Custom(c) => c.name(),
        }
    }

    /// Evaluate the function at a number
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Function::Builtin(b) => (b.definition().eval)(x),
            Function::Custom(c) => (c.eval)(x),
        }
    }

    /// Derivative of `f(u)` given the argument `u` and its derivative `du`
    ///
    /// # Errors
    /// `NotDifferentiable` for a user-defined function without a derivative rule.
    pub(crate) fn derivative(&self, u: &Expr, du: Expr) -> Result<Expr, ExprError> {
        match self {
            Function::Builtin(b) => (b.definition().derivative)(u, du),
            Function::Custom(c) => match &c.derivative {
                Some(rule) => Ok(Expr::mul_expr(du, rule(u)?)),
                None => Err(ExprError::not_differentiable(format!("{}({})", c.name, u))),
            },
        }
    }
}

impl From<Builtin> for Function {
    fn from(b: Builtin) -> Self {
        Function::Builtin(b)
    }
}

impl From<CustomFn> for Function {
    fn from(c: CustomFn) -> Self {
        Function::Custom(Rc::new(c))
    }
}

impl From<&CustomFn> for Function {
    fn from(c: &CustomFn) -> Self {
        Function::Custom(Rc::new(c.clone()))
    }
}
