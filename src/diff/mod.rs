//! Symbolic differentiation
//!
//! The rules live in [`engine`] as `Expr::derivative` and `Expr::nth_derivative`.

mod engine;
