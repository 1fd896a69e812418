use anyhow::Result;
use lambert_sampling::Report;
use plotters::prelude::*;
use std::path::Path;

/// Draws the retained directions as a point cloud above the normalized
/// density and the cosine law.
pub fn render(report: &Report, out_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(out_path, (800, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    // plotters draws y upwards, so the normal component goes there
    let mut cloud = ChartBuilder::on(&panels[0])
        .caption("Sampled directions (u, v, w)", ("sans-serif", 20))
        .margin(10)
        .build_cartesian_3d(-1.0f64..1.0f64, -1.0f64..1.0f64, -1.0f64..1.0f64)?;

    cloud.configure_axes().draw()?;
    cloud.draw_series(
        report
            .scatter
            .points()
            .map(|(u, v, w)| Circle::new((u, w, v), 2, RED.filled())),
    )?;

    let curve = &report.curve;
    let y_max = curve
        .density
        .iter()
        .chain(curve.reference.iter())
        .cloned()
        .fold(1.0f64, f64::max)
        * 1.1;

    let mut density = ChartBuilder::on(&panels[1])
        .caption("Angular distribution", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..90.0f64, 0.0f64..y_max)?;

    density
        .configure_mesh()
        .x_desc("angle")
        .y_desc("normalized count")
        .draw()?;

    density.draw_series(LineSeries::new(
        curve
            .angles_deg
            .iter()
            .cloned()
            .zip(curve.density.iter().cloned()),
        &RED,
    ))?;
    density.draw_series(LineSeries::new(
        curve
            .angles_deg
            .iter()
            .cloned()
            .zip(curve.reference.iter().cloned()),
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}
