//! Core types of the expression graph
//!
//! This module contains the fundamental types:
//! - `Expr` / `ExprKind` / `Operation` - Graph nodes
//! - `Role` - Constant / independent / dependent classification
//! - `ExprError` - Error type
//! - Display formatting

mod display;
pub(crate) mod error;
pub(crate) mod expr;

pub use error::ExprError;
pub use expr::{Expr, ExprKind, Operation, Role, Variable};
