//! Display implementation for expressions.
//!
//! Output is compact (no spaces) and uses operand precedence to decide on
//! parentheses:
//! - `2x+1`
//! - `(x+1)2`
//! - `x*sin(x)`
//! - `-(x+y)`
//!
//! Precedence levels: functions and powers 1, unary minus 2, products and
//! quotients 3, sums and differences 5, leaves 0. A left operand is wrapped when
//! its level is strictly greater than the operator's, a right operand when it is
//! greater or equal.
//!
//! Multiplication is written by juxtaposition when both sides are leaves or
//! parenthesised groups.
//!
//! Numbers print in shortest round-trip form, switching to exponent notation
//! (`1e300`, `1e-7`) below 1e-6 or from 1e21 in magnitude.
//!
//! Rendering recurses once per level of graph depth, so very deep chains can
//! exhaust the call stack.

use std::fmt;

use crate::core::expr::{Expr, ExprKind, Operation};

const SUM: u8 = 5;
const PRODUCT: u8 = 3;
const NEGATION: u8 = 2;
const POWER: u8 = 1;

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n == 0.0 {
        // Avoid printing negative zero
        write!(f, "0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        write!(f, "{:e}", n)
    } else {
        write!(f, "{}", n)
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn write_infix(
    f: &mut fmt::Formatter<'_>,
    left: &Expr,
    symbol: &str,
    right: &Expr,
    level: u8,
) -> fmt::Result {
    write_operand(f, left, left.precedence() > level)?;
    f.write_str(symbol)?;
    write_operand(f, right, right.precedence() >= level)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Constant {
                name: Some(name), ..
            } => write!(f, "{}", name),
            ExprKind::Constant { value, .. } => write_number(f, *value),
            ExprKind::Independent(var) => f.write_str(var.name()),
            ExprKind::Derived(op) => match op {
                Operation::Add(a, b) => write_infix(f, a, "+", b, SUM),
                Operation::Sub(a, b) => write_infix(f, a, "-", b, SUM),
                Operation::Mul(a, b) => {
                    let (lp, rp) = (a.precedence(), b.precedence());
                    let juxtapose = (lp > PRODUCT || lp == 0) && (rp >= PRODUCT || rp == 0);
                    write_infix(f, a, if juxtapose { "" } else { "*" }, b, PRODUCT)
                }
                Operation::Div(a, b) => write_infix(f, a, "/", b, PRODUCT),
                Operation::Pow(a, b) => write_infix(f, a, "^", b, POWER),
                Operation::Neg(a) => {
                    f.write_str("-")?;
                    write_operand(f, a, a.precedence() >= NEGATION)
                }
                Operation::Call(func, a) => write!(f, "{}({})", func.name(), a),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Expr;

    #[test]
    fn test_display_leaves() {
        assert_eq!(Expr::constant(3.0).to_string(), "3");
        assert!(Expr::constant(314.0 / 100.0).to_string().starts_with("3.14"));
        assert_eq!(Expr::constant(-0.0).to_string(), "0");
        assert_eq!(Expr::constant(f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::constant(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Expr::euler().to_string(), "e");
        assert_eq!(Expr::independent("x").to_string(), "x");
    }

    #[test]
    fn test_display_sum_and_difference() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");
        let z = Expr::independent("z");

        assert_eq!(Expr::add_expr(&x, 1.0).to_string(), "x+1");
        // Left-nested sums need no parentheses, right-nested ones do
        let left = Expr::sub_expr(Expr::add_expr(&x, &y), &z);
        assert_eq!(left.to_string(), "x+y-z");
        let right = Expr::sub_expr(&x, Expr::add_expr(&y, &z));
        assert_eq!(right.to_string(), "x-(y+z)");
    }

    #[test]
    fn test_display_product() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");

        let linear = Expr::add_expr(Expr::mul_expr(2.0, &x), 1.0);
        assert_eq!(linear.to_string(), "2x+1");

        let scaled_sum = Expr::mul_expr(Expr::add_expr(&x, 1.0), 2.0);
        assert_eq!(scaled_sum.to_string(), "(x+1)2");

        assert_eq!(Expr::mul_expr(&x, x.sin()).to_string(), "x*sin(x)");
        assert_eq!(Expr::mul_expr(&x, Expr::mul_expr(&y, 3.0)).to_string(), "x(y3)");
    }

    #[test]
    fn test_display_quotient_and_power() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");

        let q = Expr::div_expr(Expr::add_expr(&x, 1.0), Expr::mul_expr(2.0, &y)).unwrap();
        assert_eq!(q.to_string(), "(x+1)/(2y)");

        let p = Expr::pow(Expr::add_expr(&x, 1.0), 2.0);
        assert_eq!(p.to_string(), "(x+1)^2");

        let nested = Expr::pow(&x, Expr::pow(&y, 2.0));
        assert_eq!(nested.to_string(), "x^(y^2)");
    }

    #[test]
    fn test_display_negation_and_functions() {
        let x = Expr::independent("x");
        let y = Expr::independent("y");

        assert_eq!(Expr::minus(&x).to_string(), "-x");
        assert_eq!(Expr::minus(Expr::add_expr(&x, &y)).to_string(), "-(x+y)");
        assert_eq!(Expr::minus(Expr::minus(&x)).to_string(), "-(-x)");
        assert_eq!(x.cos().sin().to_string(), "sin(cos(x))");
        assert_eq!(Expr::add_expr(&x, &y).log().to_string(), "log(x+y)");
    }

    #[test]
    fn test_bound_variable_renders_by_name() {
        let x = Expr::independent("x");
        x.assign(2.0).unwrap();
        assert_eq!(Expr::mul_expr(3.0, &x).to_string(), "3x");
    }

    #[test]
    fn test_display_extreme_magnitudes() {
        assert_eq!(Expr::constant(1e300).to_string(), "1e300");
        assert_eq!(Expr::constant(-2.5e21).to_string(), "-2.5e21");
        assert_eq!(Expr::constant(1e-7).to_string(), "1e-7");
        assert_eq!(Expr::constant(123456.0).to_string(), "123456");
        assert_eq!(Expr::constant(0.000001).to_string(), "0.000001");
        assert_eq!(Expr::constant(1e20).to_string(), "100000000000000000000");
    }
}
