/// Taylor expansion showcase
///
/// Expands a few functions with the `Taylor` builder and compares the
/// truncated series with the exact value near the centre.
///
/// Run with: RUST_LOG=trace cargo run --example taylor_showcase
use anyhow::{Context, Result};
use symb_graph::{CustomFn, Expr, ExprError, Taylor, taylor};

fn compare(label: &str, f: &Expr, x: &Expr, series: &Expr, points: &[f64]) -> Result<()> {
    println!("{}", label);
    println!("  series: {}", series);
    for &p in points {
        x.assign(p)?;
        let (approx, exact) = (series.value()?, f.value()?);
        println!(
            "  x = {:>5}: series = {:>12.8}, exact = {:>12.8}, error = {:.2e}",
            p,
            approx,
            exact,
            (approx - exact).abs()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let x = Expr::independent("x");

    let f = x.exp();
    let series = taylor(&f, &x, 0.0, 6).context("expanding exp")?;
    compare("exp(x) around 0, 6 terms", &f, &x, &series, &[0.1, 0.5, 1.0])?;

    let f = x.log();
    let series = Taylor::new().center(1.0).order(8).expand(&f, &x)?;
    compare("log(x) around 1, 8 terms", &f, &x, &series, &[0.9, 1.1, 1.5])?;

    let f = x.sin() * x.cos();
    let coefficients = Taylor::new().order(8).coefficients(&f, &x)?;
    println!("sin(x)cos(x) coefficients: {:?}", coefficients);

    // A function without a derivative rule can only contribute its value
    let opaque = CustomFn::new("opaque", f64::sqrt);
    match taylor(&(&x + 1.0).apply(&opaque), &x, 0.0, 3) {
        Err(ExprError::NotDifferentiable { expr }) => println!("{} has no derivative rule", expr),
        other => println!("unexpected: {:?}", other),
    }

    // Derivatives of tan grow quickly; the node limit stops the expansion
    let f = x.tan();
    match Taylor::new().order(12).max_nodes(200).expand(&f, &x) {
        Err(e) => println!("tan(x), 12 terms: {}", e),
        Ok(series) => println!("tan(x), 12 terms: {}", series),
    }

    Ok(())
}
