//! Taylor expansion driver
//!
//! The `i`-th coefficient is `f^(i)(a) / i!`. Rather than computing factorials,
//! each derivative term is divided by `i` as it is produced, so the running
//! term is always `f^(i) / i!` and its value at the bound centre is the
//! coefficient directly.

use log::{debug, trace};

use crate::{Expr, ExprError};

/// Default number of terms of an expansion
pub const DEFAULT_TAYLOR_ORDER: usize = 10;
/// Default limit on the distinct node count of a derivative term
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Builder for Taylor expansions.
///
/// # Example
/// ```
/// use symb_graph::{Expr, Taylor};
///
/// let x = Expr::independent("x");
/// let f = x.exp();
/// let series = Taylor::new().order(5).expand(&f, &x).unwrap();
///
/// x.assign(1.0).unwrap();
/// assert!((series.value().unwrap() - std::f64::consts::E).abs() < 0.02);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Taylor {
    center: f64,
    order: usize,
    max_nodes: Option<usize>,
}

impl Default for Taylor {
    fn default() -> Self {
        Self {
            center: 0.0,
            order: DEFAULT_TAYLOR_ORDER,
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }
}

impl Taylor {
    /// Create a new expansion builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Expansion point `a`
    pub fn center(mut self, a: f64) -> Self {
        self.center = a;
        self
    }

    /// Number of terms, i.e. powers `0..order` of `(x - a)`
    pub fn order(mut self, n: usize) -> Self {
        self.order = n;
        self
    }

    /// Set maximum distinct node count of a derivative term
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Remove the node count limit
    pub fn unlimited(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Build `sum c_i * (x - a)^i` for `f` around the configured centre.
    ///
    /// `x` is bound to the constant `a` and stays bound when this returns, so
    /// the result evaluates at the centre until `x` is reassigned.
    ///
    /// # Errors
    /// - `UnboundValue` if `f` depends on an unbound variable other than `x`
    /// - `MaxNodesExceeded` if a derivative term grows past the node limit
    /// - any error raised while differentiating `f`
    pub fn expand(&self, f: &Expr, x: &Expr) -> Result<Expr, ExprError> {
        let a = Expr::constant(self.center);
        let shifted = Expr::sub_expr(x, &a);
        let mut series = Expr::zero();
        self.run(f, x, |i, c| {
            let term = Expr::mul_expr(c, Expr::pow(&shifted, i as f64));
            series = Expr::add_expr(&series, term);
        })?;
        Ok(series)
    }

    /// The numeric coefficients `f^(i)(a) / i!`, without building the polynomial.
    ///
    /// Shorter than `order` when expansion stopped at an undefined term.
    pub fn coefficients(&self, f: &Expr, x: &Expr) -> Result<Vec<f64>, ExprError> {
        let mut coefficients = Vec::with_capacity(self.order);
        self.run(f, x, |_, c| coefficients.push(c))?;
        Ok(coefficients)
    }

    fn run(
        &self,
        f: &Expr,
        x: &Expr,
        mut emit: impl FnMut(usize, f64),
    ) -> Result<(), ExprError> {
        debug!(
            "taylor expansion of {} around {} = {}, {} terms",
            f, x, self.center, self.order
        );
        x.assign(self.center)?;

        let mut term = f.clone();
        let mut emitted = 0;
        for i in 0..self.order {
            if i > 0 {
                term = Expr::div_expr(term.derivative(x)?, i as f64)?;
                if let Some(limit) = self.max_nodes
                    && term.node_count() > limit
                {
                    return Err(ExprError::MaxNodesExceeded { limit });
                }
            }
            let c = term.value()?;
            if i > 0 && c.is_nan() {
                debug!("stopping at term {}: coefficient is undefined", i);
                break;
            }
            trace!("term {}: {} = {}", i, term, c);
            emit(i, c);
            emitted += 1;
        }

        debug!("taylor expansion finished with {} terms", emitted);
        Ok(())
    }
}
