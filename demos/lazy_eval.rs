/// Lazy evaluation and rebinding
///
/// Builds z = log(xy), binds x and y, differentiates, then rebinds x and shows
/// that every dependent node follows without being rebuilt.
///
/// Run with: RUST_LOG=debug cargo run --example lazy_eval
use anyhow::{Context, Result};
use log::info;
use symb_graph::{Expr, mul};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let x = Expr::independent("x");
    let y = Expr::independent("y");
    let z = mul(&x, &y).log();

    println!("z = {} (defined: {})", z, z.is_defined());

    x.assign(3.0)?;
    y.assign(4.0)?;

    let dz = z.derivative(&x).context("differentiating z")?;
    println!("{} = {}", dz, dz.value()?);

    for v in [1.0, 0.5, 10.0] {
        x.assign(v)?;
        info!("x rebound to {}", v);
        println!("x = {:>4}: z = {:.6}, dz/dx = {:.6}", v, z.value()?, dz.value()?);
    }

    // y follows another variable instead of a number
    let t = Expr::independent("t");
    y.assign(Expr::pow(&t, 2.0))?;
    t.assign(2.0)?;
    println!("y = t^2, t = 2: z = {:.6}, role of y = {:?}", z.value()?, y.role());
    println!("dz/dt = {}", z.derivative(&t)?);

    match x.assign(&z) {
        Ok(()) => println!("unexpected: cyclic binding accepted"),
        Err(e) => println!("x := z rejected: {}", e),
    }

    Ok(())
}
