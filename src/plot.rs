//! Visualization utilities for generating charts

use crate::spread::Point;
use anyhow::Result;
use plotters::prelude::*;

/// `n + 1` evenly spaced samples of `f` over `[0, 1]`
pub fn sample_curve(mut f: impl FnMut(f64) -> Result<f64>, n: usize) -> Result<Vec<(f64, f64)>> {
    let n = n.max(1);
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Ok((t, f(t)?))
        })
        .collect()
}

/// Line chart of a sampled curve, `t` on the horizontal axis
pub fn plot_curve(caption: &str, samples: &[(f64, f64)], out_path: &str) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let finite = samples.iter().map(|(_, y)| *y).filter(|y| y.is_finite());
    let y_min = finite.clone().fold(0.0, f64::min);
    let y_max = finite.fold(1.0, f64::max);
    // back and elastic leave [0, 1]; keep some headroom either way
    let pad = (y_max - y_min).max(1e-12) * 0.05;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, (y_min - pad)..(y_max + pad))?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(samples.iter().copied(), &BLACK))?;
    root.present()?;
    Ok(())
}

/// Scatter chart of a point spread on a square frame, points labelled by output rank
pub fn plot_spread(points: &[Point], out_path: &str) -> Result<()> {
    let root = BitMapBackend::new(out_path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let half = points
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs()])
        .filter(|v| v.is_finite())
        .fold(1e-12, f64::max)
        * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Sunflower spread", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-half..half, -half..half)?;
    chart.configure_mesh().draw()?;
    chart.draw_series(points.iter().enumerate().map(|(i, p)| {
        EmptyElement::at((p.x, p.y))
            + Circle::new((0, 0), 4, BLACK.filled())
            + Text::new(format!("{i}"), (6, -6), ("sans-serif", 12.0))
    }))?;
    root.present()?;
    Ok(())
}
