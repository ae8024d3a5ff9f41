//! Expression graph nodes.
//!
//! This module defines:
//! - `Expr` - A shared handle to one node of the expression graph
//! - `ExprKind` - The three node roles (constant, independent, derived)
//! - `Operation` - The operator and operands of a derived node
//! - `Variable` - Name and private binding slot of an independent
//! - `Role` - The constant/independent/dependent classification
//!
//! # Architecture
//!
//! ## Shared DAG
//! `Expr` wraps an `Rc`, so cloning a handle is cheap and a subexpression can be
//! an operand of any number of parents. Node identity (used by differentiation to
//! recognise the variable) is pointer identity, never structural equality:
//! two independents both named `x` are different variables.
//!
//! ## Laziness
//! Nothing is cached. `value()` walks the graph each time it is called, so
//! rebinding an independent is visible through every node that references it.
//!
//! ## Rebinding
//! The binding slot of an independent is the only interior-mutable state in the
//! graph. `Expr` is `!Send` and `!Sync` because of it.
//!
//! # Usage
//!
//! ```
//! use symb_graph::{Expr, Role};
//!
//! let x = Expr::independent("x");
//! let y = x.sin() * 2.0;
//! assert!(y.value().is_err());
//!
//! x.assign(0.0).unwrap();
//! assert_eq!(y.value().unwrap(), 0.0);
//! assert_eq!(x.role(), Role::Dependent);
//! ```

mod analysis;
mod constructors;
mod evaluate;

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::core::error::ExprError;
use crate::functions::Function;

// =============================================================================
// EXPRESSION ID COUNTER
// =============================================================================

static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// EXPR - Shared handle to a graph node
// =============================================================================

/// A node of the expression graph.
///
/// Cloning an `Expr` clones the handle, not the node.
#[derive(Clone)]
pub struct Expr(Rc<Node>);

pub(crate) struct Node {
    /// Unique ID for debugging and DAG traversal bookkeeping
    id: u64,
    kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.0.kind
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr#{}({})", self.0.id, self)
    }
}

// =============================================================================
// EXPRKIND - Node roles
// =============================================================================

/// The role and payload of an expression node.
#[derive(Debug)]
pub enum ExprKind {
    /// Fixed numeric literal, optionally displayed by name (e.g. `e`)
    Constant { value: f64, name: Option<Rc<str>> },

    /// Free variable. Unbound until `Expr::assign` stores a binding.
    Independent(Variable),

    /// Result of an arithmetic or transcendental operation
    Derived(Operation),
}

/// Name and binding slot of an independent variable.
///
/// The slot is private: it is read through `Expr::binding` and written only by
/// `Expr::assign` and `Expr::unassign`, which reject cyclic bindings.
pub struct Variable {
    name: Rc<str>,
    binding: RefCell<Option<Expr>>,
}

impl Variable {
    pub(crate) fn new(name: &str) -> Self {
        Variable {
            name: Rc::from(name),
            binding: RefCell::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }

    /// Cloned handle, so no borrow of the slot outlives the call
    pub(crate) fn binding(&self) -> Option<Expr> {
        self.binding.borrow().clone()
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Operator and operands of a derived node.
///
/// Operands are already simplified when the node is allocated.
#[derive(Debug)]
pub enum Operation {
    Add(Expr, Expr),
    Sub(Expr, Expr),
    Mul(Expr, Expr),
    Div(Expr, Expr),
    Pow(Expr, Expr),
    Neg(Expr),
    Call(Function, Expr),
}

impl Operation {
    /// Rendering precedence; lower binds tighter
    pub const fn precedence(&self) -> u8 {
        match self {
            Operation::Pow(..) | Operation::Call(..) => 1,
            Operation::Neg(_) => 2,
            Operation::Mul(..) | Operation::Div(..) => 3,
            Operation::Add(..) | Operation::Sub(..) => 5,
        }
    }

    /// Iterate over the operands in order
    pub fn operands(&self) -> impl Iterator<Item = &Expr> {
        let (first, second) = match self {
            Operation::Add(a, b)
            | Operation::Sub(a, b)
            | Operation::Mul(a, b)
            | Operation::Div(a, b)
            | Operation::Pow(a, b) => (a, Some(b)),
            Operation::Neg(a) | Operation::Call(_, a) => (a, None),
        };
        std::iter::once(first).chain(second)
    }
}

// =============================================================================
// ROLE
// =============================================================================

/// Classification of a node on the three-level constant/independent/dependent scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Constant,
    Independent,
    Dependent,
}

impl Role {
    /// Numeric level: constant = 0, independent = 1, dependent = 2
    pub const fn level(self) -> u8 {
        match self {
            Role::Constant => 0,
            Role::Independent => 1,
            Role::Dependent => 2,
        }
    }

    /// Role for a level, clamped to the top of the scale
    pub const fn from_level(level: u8) -> Role {
        match level {
            0 => Role::Constant,
            1 => Role::Independent,
            _ => Role::Dependent,
        }
    }

    /// Role of a variable assigned from a node with this role.
    ///
    /// `max(level + 1, 2)` on a scale that stops at 2, so always `Dependent`.
    pub const fn promoted(self) -> Role {
        let level = self.level() + 1;
        Role::from_level(if level > 2 { level } else { 2 })
    }
}

// =============================================================================
// ACCESSORS AND REBINDING
// =============================================================================

impl Expr {
    pub(crate) fn new(kind: ExprKind) -> Self {
        Expr(Rc::new(Node {
            id: next_id(),
            kind,
        }))
    }

    /// Unique ID of the node
    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// The role and payload of the node
    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// True when both handles point at the same node
    #[inline]
    pub fn same_node(&self, other: &Expr) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn role(&self) -> Role {
        match self.kind() {
            ExprKind::Constant { .. } => Role::Constant,
            ExprKind::Independent(var) => match var.binding() {
                Some(target) => target.role().promoted(),
                None => Role::Independent,
            },
            ExprKind::Derived(_) => Role::Dependent,
        }
    }

    /// Rendering precedence; constants and independents are 0
    pub fn precedence(&self) -> u8 {
        match self.kind() {
            ExprKind::Constant { .. } | ExprKind::Independent(_) => 0,
            ExprKind::Derived(op) => op.precedence(),
        }
    }

    /// Value of a constant node, `None` for any other role
    #[inline]
    pub fn as_constant(&self) -> Option<f64> {
        match self.kind() {
            ExprKind::Constant { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// True for a constant node whose value is exactly `n`
    #[inline]
    pub fn is_constant_value(&self, n: f64) -> bool {
        self.as_constant().is_some_and(|v| v == n)
    }

    /// Name of an independent, or display name of a named constant
    pub fn name(&self) -> Option<&str> {
        match self.kind() {
            ExprKind::Constant { name, .. } => name.as_deref(),
            ExprKind::Independent(var) => Some(var.name()),
            ExprKind::Derived(_) => None,
        }
    }

    /// Current binding of an independent
    ///
    /// Returns a cloned handle so no borrow of the slot outlives the call.
    pub fn binding(&self) -> Option<Expr> {
        match self.kind() {
            ExprKind::Independent(var) => var.binding(),
            _ => None,
        }
    }

    /// Bind an independent variable to another expression or a number.
    ///
    /// The variable keeps its identity and name; its value and derivative are
    /// taken from `target` from now on, and its role becomes `Dependent`.
    /// Rebinding an already bound variable replaces the previous binding.
    ///
    /// The binding is a live link to `target`, not a snapshot of its value:
    /// if `target` is itself an independent that is rebound later, this
    /// variable follows the new binding for both its value and its derivative.
    ///
    /// # Errors
    /// - `NotAssignable` if `self` is not an independent variable
    /// - `CyclicBinding` if `target` depends on `self`
    pub fn assign(&self, target: impl Into<Expr>) -> Result<(), ExprError> {
        let ExprKind::Independent(var) = self.kind() else {
            return Err(ExprError::NotAssignable {
                expr: self.render(),
            });
        };
        let target = target.into();
        if target.depends_on(self) {
            return Err(ExprError::CyclicBinding {
                name: var.name().to_string(),
            });
        }
        debug!("assigning {} := {}", var.name(), target);
        var.binding.replace(Some(target));
        Ok(())
    }

    /// Drop the binding of an independent, returning it to the unbound state
    pub fn unassign(&self) -> Result<(), ExprError> {
        match self.kind() {
            ExprKind::Independent(var) => {
                debug!("unassigning {}", var.name());
                var.binding.replace(None);
                Ok(())
            }
            _ => Err(ExprError::NotAssignable {
                expr: self.render(),
            }),
        }
    }

    /// Textual form of the expression
    pub fn render(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// DROP IMPLEMENTATION - Iterative drop to prevent stack overflow
// =============================================================================

impl Drop for Node {
    fn drop(&mut self) {
        fn drain_children(kind: &mut ExprKind, queue: &mut Vec<Expr>) {
            let placeholder = ExprKind::Constant {
                value: 0.0,
                name: None,
            };
            match std::mem::replace(kind, placeholder) {
                ExprKind::Derived(op) => match op {
                    Operation::Add(a, b)
                    | Operation::Sub(a, b)
                    | Operation::Mul(a, b)
                    | Operation::Div(a, b)
                    | Operation::Pow(a, b) => {
                        queue.push(a);
                        queue.push(b);
                    }
                    Operation::Neg(a) | Operation::Call(_, a) => queue.push(a),
                },
                ExprKind::Independent(var) => queue.extend(var.binding.into_inner()),
                ExprKind::Constant { .. } => {}
            }
        }

        let mut work_queue = Vec::new();
        drain_children(&mut self.kind, &mut work_queue);

        while let Some(Expr(child)) = work_queue.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child) {
                drain_children(&mut node.kind, &mut work_queue);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
