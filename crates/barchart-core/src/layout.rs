// File: crates/barchart-core/src/layout.rs
// Summary: Bar layout engine; distributes available width into bars and gaps.

/// Per-render bar geometry. Recomputed whenever the series length or the
/// available width changes; never persisted across renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Conventional per-bar draw width (two spacing units); the shell may
    /// derive its own instead.
    pub bar_width: f32,
    /// Spacing between adjacent bars.
    pub gap: f32,
    /// Width left for bars after the outer margin is reserved.
    pub content_width: f32,
}

/// Distribute `available_width` across `n` bars after reserving `margin` for
/// outer padding. Each bar's footprint spans three spacing units (bar plus
/// its share of gaps), which keeps visual density constant as `n` grows.
pub fn layout(n: usize, available_width: f32, margin: f32) -> LayoutMetrics {
    let content_width = (available_width - margin).max(0.0);
    if n == 0 {
        return LayoutMetrics { bar_width: 0.0, gap: 0.0, content_width };
    }
    let gap = content_width / (n as f32 * 3.0);
    LayoutMetrics { bar_width: gap * 2.0, gap, content_width }
}
