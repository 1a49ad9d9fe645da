//! Solve the chamfered 5×6 demonstration plate and print the equations and
//! temperature field.
//!
//! Run with `RUST_LOG=debug` to see per-cell assembly details.

use heatgrid::prelude::*;

fn main() -> Result<(), heatgrid::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height) = (5, 6);
    let config = ModelConfig::new(width, height, Spacing::uniform(0.2));
    let mut model = ConductionModel::with_material(config, Material::new(20.0, 1.0e4))?;

    let top = height - 1;
    let right = width - 1;
    let convection = BoundaryCondition::try_convection(10.0, 30.0)?;

    model.remove(CellIndex::new(top, 0))?;
    model.remove(CellIndex::new(top, right))?;
    for col in 0..width {
        model.add_boundary_condition(
            CellIndex::new(0, col),
            BoundaryCondition::try_constant_temperature(100.0)?,
        )?;
    }
    for col in 1..right {
        model.add_boundary_condition(CellIndex::new(top, col), convection)?;
    }
    for row in 0..top {
        model.add_boundary_condition(CellIndex::new(row, right), BoundaryCondition::try_flux(10.0)?)?;
    }
    model.add_boundary_condition(CellIndex::new(top - 1, 0), convection)?;
    model.add_boundary_condition(CellIndex::new(top - 1, right), convection)?;

    println!("{}", model.equation_listing()?);

    let solution = model.solve()?;
    for row in (0..height).rev() {
        let line: Vec<String> = (0..width)
            .map(|col| match model.temperature(CellIndex::new(row, col)) {
                Ok(Some(t)) => format!("{t:8.2}"),
                _ => format!("{:>8}", "-"),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    if let Some((lo, hi)) = solution.range() {
        println!("\n{} cells, T in [{lo:.2}, {hi:.2}]", solution.len());
    }

    for cell in model.cells().filter(|c| !c.boundary_conditions().is_empty()) {
        let labels: Vec<String> = cell
            .boundary_conditions()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{}: {}", cell.symbol(), labels.join("; "));
    }
    Ok(())
}
