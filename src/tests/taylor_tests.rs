use crate::{DEFAULT_TAYLOR_ORDER, Expr, ExprError, Taylor, cos, log, taylor};

#[test]
fn test_default_order_matches_convenience_wrapper() {
    let x = Expr::independent("x");
    let f = cos(&x);
    let coefficients = Taylor::new().coefficients(&f, &x).unwrap();
    assert_eq!(coefficients.len(), DEFAULT_TAYLOR_ORDER);

    let series = taylor(&f, &x, 0.0, DEFAULT_TAYLOR_ORDER).unwrap();
    x.assign(0.4).unwrap();
    assert!((series.value().unwrap() - 0.4_f64.cos()).abs() < 1e-9);
}

#[test]
fn test_expansion_around_nonzero_centre() {
    let x = Expr::independent("x");
    let f = log(&x);
    let series = taylor(&f, &x, 1.0, 8).unwrap();

    // log(1 + h) = h - h^2/2 + h^3/3 - ...
    let coefficients = Taylor::new().center(1.0).order(4).coefficients(&f, &x).unwrap();
    let expected = [0.0, 1.0, -0.5, 1.0 / 3.0];
    for (c, e) in coefficients.iter().zip(expected) {
        assert!((c - e).abs() < 1e-12, "{} != {}", c, e);
    }

    x.assign(1.1).unwrap();
    assert!((series.value().unwrap() - 1.1_f64.ln()).abs() < 1e-8);
}

#[test]
fn test_variable_stays_bound_to_centre() {
    let x = Expr::independent("x");
    let series = taylor(&x.exp(), &x, 2.0, 3).unwrap();
    assert_eq!(x.value().unwrap(), 2.0);
    // At the centre only the constant term survives
    assert!((series.value().unwrap() - 2.0_f64.exp()).abs() < 1e-12);
}

#[test]
fn test_unrelated_unbound_variable_fails() {
    let x = Expr::independent("x");
    let k = Expr::independent("k");
    let err = taylor(&(&x * &k), &x, 0.0, 3).unwrap_err();
    assert_eq!(
        err,
        ExprError::UnboundValue {
            name: "k".to_string()
        }
    );
}

#[test]
fn test_node_limit_can_be_lifted() {
    let x = Expr::independent("x");
    let f = x.tan();
    assert!(matches!(
        Taylor::new().order(7).max_nodes(20).expand(&f, &x),
        Err(ExprError::MaxNodesExceeded { limit: 20 })
    ));
    assert!(Taylor::new().order(7).unlimited().expand(&f, &x).is_ok());
}
