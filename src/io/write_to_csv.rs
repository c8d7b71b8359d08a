use csv::Writer;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::disc::grid::Grid1d;

#[derive(Serialize)]
struct PointData {
    x: f64,
    solution: f64,
}

/// Write the interior cells of a solution snapshot as `(x, solution)` rows.
pub fn write_to_csv(
    u: ArrayView1<f64>,
    grid: &Grid1d,
    filename: &str,
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_path(filename)?;
    for i in grid.interior() {
        let data = PointData {
            x: grid.x[i],
            solution: u[i],
        };
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}
