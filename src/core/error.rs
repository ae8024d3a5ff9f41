//! Error types for expression construction, evaluation and differentiation

use thiserror::Error;

/// Errors that can occur while building, evaluating or differentiating expressions
///
/// All errors are surfaced to the immediate caller; nothing is retried and no
/// partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Evaluation reached an independent variable that was never assigned
    #[error("'{name}' is undefined")]
    UnboundValue { name: String },

    /// A division node was requested with the constant zero as denominator
    #[error("cannot divide '{numerator}' by zero")]
    DivisionByZero { numerator: String },

    /// The variable of differentiation was a constant
    #[error("'{constant}' is constant and is not a variable of differentiation")]
    DifferentiateByConstant { constant: String },

    /// A derived node carries no derivative rule
    #[error("'{expr}' is not differentiable")]
    NotDifferentiable { expr: String },

    /// Only independent variables can be rebound
    #[error("'{expr}' is not an independent variable and cannot be assigned")]
    NotAssignable { expr: String },

    /// The assigned expression depends on the variable being assigned
    #[error("assigning to '{name}' would make it depend on itself")]
    CyclicBinding { name: String },

    /// A derivative grew past the configured node limit
    #[error("expression size exceeds the limit of {limit} nodes")]
    MaxNodesExceeded { limit: usize },
}

impl ExprError {
    pub(crate) fn unbound(name: impl Into<String>) -> Self {
        ExprError::UnboundValue { name: name.into() }
    }

    pub(crate) fn division_by_zero(numerator: impl Into<String>) -> Self {
        ExprError::DivisionByZero {
            numerator: numerator.into(),
        }
    }

    pub(crate) fn not_differentiable(expr: impl Into<String>) -> Self {
        ExprError::NotDifferentiable { expr: expr.into() }
    }
}
