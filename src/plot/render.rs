use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use plotters::prelude::*;

use super::chart::LineChart;
use crate::color::generate_palette;
use crate::data::writer::ensure_parent_dir;

// ---------------------------------------------------------------------------
// PNG rendering
// ---------------------------------------------------------------------------

/// Draw `chart` into a PNG at `path`, creating the parent directory.
pub fn render_png(chart: &LineChart, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    draw(chart, path).with_context(|| format!("rendering plot {}", path.display()))?;
    info!(
        "wrote '{}' ({} series) to {}",
        chart.title,
        chart.series.len(),
        path.display()
    );
    Ok(())
}

fn draw(chart: &LineChart, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, chart.size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = chart.bounds();
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = ctx.configure_mesh();
    if !chart.grid {
        mesh.disable_mesh();
    }
    if let Some(x) = &chart.x_label {
        mesh.x_desc(x.as_str());
    }
    if let Some(y) = &chart.y_label {
        mesh.y_desc(y.as_str());
    }
    mesh.draw()?;

    let palette = generate_palette(chart.series.len());
    for (series, colour) in chart.series.iter().zip(palette) {
        let segments = series.drawable_segments();
        let dropped = series.len() - segments.iter().map(Vec::len).sum::<usize>();
        if dropped > 0 {
            debug!("'{}': skipped {dropped} non-finite samples", series.label);
        }

        for (k, segment) in segments.into_iter().enumerate() {
            let anno = ctx.draw_series(LineSeries::new(segment, colour.stroke_width(2)))?;
            // one legend entry per series, not per segment
            if k == 0 {
                anno.label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
            }
        }
    }

    if chart.legend {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
