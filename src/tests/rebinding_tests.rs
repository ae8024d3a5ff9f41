use crate::{Expr, ExprError, ExprKind, Role, add, mul, sin};

#[test]
fn test_values_are_never_cached() {
    let x = Expr::independent("x");
    let y = add(mul(2.0, &x), 1.0);

    for v in [0.0, 1.0, -3.5, 100.0] {
        x.assign(v).unwrap();
        assert_eq!(y.value().unwrap(), 2.0 * v + 1.0);
    }
}

#[test]
fn test_binding_is_a_live_link() {
    let t = Expr::independent("t");
    let x = Expr::independent("x");
    let y = sin(&x);

    x.assign(&t).unwrap();
    assert!(y.is_undefined());

    t.assign(0.0).unwrap();
    assert_eq!(y.value().unwrap(), 0.0);

    t.assign(std::f64::consts::FRAC_PI_2).unwrap();
    assert_eq!(y.value().unwrap(), 1.0);
}

#[test]
fn test_rebinding_to_expression_changes_derivative() {
    let t = Expr::independent("t");
    let x = Expr::independent("x");
    let y = mul(&x, &x);

    // Unbound x is independent of t
    assert_eq!(y.derivative(&t).unwrap().as_constant(), Some(0.0));

    // x = t^2 makes y = t^4, so dy/dt = 4t^3
    x.assign(Expr::pow(&t, 2.0)).unwrap();
    let dy_dt = y.derivative(&t).unwrap();
    t.assign(2.0).unwrap();
    assert!((dy_dt.value().unwrap() - 32.0).abs() < 1e-10);
}

#[test]
fn test_assign_rejects_non_independents() {
    let x = Expr::independent("x");
    let c = Expr::constant(1.0);
    let d = sin(&x);

    assert_eq!(
        c.assign(2.0),
        Err(ExprError::NotAssignable {
            expr: "1".to_string()
        })
    );
    assert!(matches!(d.assign(2.0), Err(ExprError::NotAssignable { .. })));
    assert!(matches!(d.unassign(), Err(ExprError::NotAssignable { .. })));
}

#[test]
fn test_cyclic_bindings_are_rejected() {
    let x = Expr::independent("x");
    let y = Expr::independent("y");

    assert_eq!(
        x.assign(add(&x, 1.0)),
        Err(ExprError::CyclicBinding {
            name: "x".to_string()
        })
    );

    // Indirect cycle through another binding
    y.assign(mul(2.0, &x)).unwrap();
    assert!(matches!(x.assign(&y), Err(ExprError::CyclicBinding { .. })));

    // The failed assignment left x unbound
    assert_eq!(x.role(), Role::Independent);
}

#[test]
fn test_unassign_restores_independent() {
    let x = Expr::independent("x");
    let y = add(&x, 1.0);
    x.assign(4.0).unwrap();
    assert_eq!(y.value().unwrap(), 5.0);

    x.unassign().unwrap();
    assert_eq!(x.role(), Role::Independent);
    assert!(matches!(y.value(), Err(ExprError::UnboundValue { .. })));
}

#[test]
fn test_follows_rebound_target_value_and_derivative() {
    let t = Expr::independent("t");
    let s = Expr::independent("s");
    let x = Expr::independent("x");
    let y = mul(&x, &x);

    x.assign(&t).unwrap();
    t.assign(3.0).unwrap();
    assert_eq!(y.value().unwrap(), 9.0);

    // Rebinding t is seen through x
    t.assign(mul(2.0, &s)).unwrap();
    s.assign(1.5).unwrap();
    assert_eq!(y.value().unwrap(), 9.0);
    let dy_ds = y.derivative(&s).unwrap();
    assert_eq!(dy_ds.value().unwrap(), 12.0);
}

#[test]
fn test_binding_slot_is_only_reachable_through_assign() {
    let x = Expr::independent("x");
    let y = Expr::independent("y");
    y.assign(add(&x, 1.0)).unwrap();

    assert!(x.assign(&y).is_err());
    let ExprKind::Independent(var) = x.kind() else {
        panic!("x should stay an independent");
    };
    assert_eq!(var.name(), "x");
    assert!(!var.is_bound());
    assert!(x.binding().is_none());
    assert!(y.depends_on(&x));
    assert!(!x.depends_on(&y));
    assert_eq!(y.value(), Err(ExprError::unbound("x")));

    x.assign(2.0).unwrap();
    assert!(var.is_bound());
    assert_eq!(y.value().unwrap(), 3.0);
}
