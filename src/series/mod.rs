//! Truncated Taylor series built by repeated differentiation

mod taylor;

pub use taylor::{DEFAULT_MAX_NODES, DEFAULT_TAYLOR_ORDER, Taylor};
