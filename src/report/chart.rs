use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::report::ChartPoint;

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue
const WIDTH: u32 = 900;
const ROW_H: u32 = 56;
const CHROME_H: u32 = 140; // caption + x axis

/// Render a horizontal bar chart ("Privacy Risk Breakdown") to a PNG file.
///
/// Bars keep the order of `points`, top to bottom.
pub fn render(points: &[ChartPoint], output_path: &Path) -> Result<()> {
    if points.is_empty() {
        anyhow::bail!("no matched categories to chart");
    }

    let rows = points.len() as u32;
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1) as u32;

    let root = BitMapBackend::new(output_path, (WIDTH, CHROME_H + rows * ROW_H)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Privacy Risk Breakdown", ("sans-serif", 26))
        .margin(18)
        .x_label_area_size(44)
        .y_label_area_size(200)
        .build_cartesian_2d(0u32..max + 1, (0u32..rows).into_segmented())?;

    // Segment 0 sits at the bottom, so index from the end to keep input order top-down
    let label_for = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => points
            .get((rows - 1).saturating_sub(*i) as usize)
            .map(|p| p.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Keyword Hits")
        .x_labels((max + 2) as usize)
        .y_labels(points.len())
        .y_label_formatter(&label_for)
        .label_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(points.iter().enumerate().map(|(i, p)| {
        let row = rows - 1 - i as u32;
        let mut bar = Rectangle::new(
            [
                (0, SegmentValue::Exact(row)),
                (p.value as u32, SegmentValue::Exact(row + 1)),
            ],
            BAR_COLOR.filled(),
        );
        bar.set_margin(8, 8, 0, 0);
        bar
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        assert!(render(&[], &path).is_err());
        assert!(!path.exists());
    }
}
