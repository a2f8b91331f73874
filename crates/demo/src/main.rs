// File: crates/demo/src/main.rs
// Summary: Demo drives the engine through drag, hover, and series replacement,
// printing a textual rendition of each frame.

use anyhow::Result;
use barchart_core::{BarChart, Series, SeriesSource, SharedSeries};

const CHART_WIDTH: f32 = 300.0;
const ROWS: usize = 8;

fn main() -> Result<()> {
    let shared = SharedSeries::new(Series::with_labels(
        vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0],
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]
            .into_iter()
            .map(String::from)
            .collect(),
    )?);

    let mut chart = BarChart::new(shared.clone());
    chart.set_available_width(CHART_WIDTH);

    println!(
        "Quarterly sales — {} bars, max {}",
        chart.bar_count(),
        chart.series().max_value()
    );

    // 1) Resting frame
    println!("\n[1] idle");
    render(&chart);

    // 2) Drag sweep left to right
    println!("\n[2] drag sweep");
    for k in [0.05, 0.35, 0.65, 0.95] {
        chart.on_pointer_move(k);
        report(&chart, &format!("drag at {k:.2}"));
    }
    chart.on_pointer_up();
    println!("  released -> active: {}", chart.is_active());

    // 3) Hover crossing a bar boundary; the stale leave callback is ignored
    println!("\n[3] hover handoff");
    chart.on_hover_enter(2);
    report(&chart, "enter bar 2");
    chart.on_magnify_request(-1.0);
    report(&chart, "stale leave (ignored)");
    chart.on_hover_enter(3);
    report(&chart, "enter bar 3");
    render(&chart);
    chart.on_hover_exit();

    // 4) Replace the series while a selection is live
    println!("\n[4] replacement re-clamp");
    chart.on_hover_enter(5);
    report(&chart, "enter bar 5");
    shared.replace(Series::with_labels(
        vec![14.0, 9.0, 21.0],
        ["Q1", "Q2", "Q3"].into_iter().map(String::from).collect(),
    )?);
    chart.series_replaced();
    report(&chart, "after shrink to 3 bars");
    render(&chart);

    Ok(())
}

/// One-line summary of the interactive state.
fn report(chart: &BarChart<SharedSeries>, stage: &str) {
    match (chart.active_index(), chart.active_value()) {
        (Some(i), Some(v)) => {
            let label = chart.active_label().unwrap_or_default();
            println!(
                "  {stage}: bar {i} ({label} = {v}), label x {:.1}, arrow {:+.1}",
                chart.label_offset(),
                chart.arrow_offset()
            );
        }
        _ => println!("  {stage}: idle"),
    }
}

/// Text rendition of the bars: height from the normalized value, the active
/// bar drawn emphasized.
fn render(chart: &BarChart<SharedSeries>) {
    let n = chart.bar_count();
    let heights: Vec<usize> = (0..n)
        .map(|i| {
            let f = chart.normalized_height(i).unwrap_or(0.0);
            (f * ROWS as f64).round() as usize
        })
        .collect();

    for row in (1..=ROWS).rev() {
        let mut line = String::from("  ");
        for (i, &h) in heights.iter().enumerate() {
            let cell = if h >= row {
                if chart.active_index() == Some(i) { "#" } else { "|" }
            } else {
                " "
            };
            line.push_str(cell);
            line.push(' ');
        }
        println!("{line}");
    }
    println!("  {}", "-".repeat(n * 2));
    println!("  gap {:.1}", chart.bar_spacing());
}
