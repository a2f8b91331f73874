// File: crates/barchart-core/src/label.rs
// Summary: Floating value label placement, pinned inside the chart bounds.

/// Absolute x offset centering a `label_width`-wide label under the pointer,
/// pinned so the label body never crosses the left or right chart edge.
pub fn label_offset(fraction: f64, chart_width: f32, label_width: f32, margin: f32) -> f32 {
    let raw = fraction as f32 * chart_width - label_width * 0.5;
    let right = (chart_width - label_width - margin).max(margin);
    raw.clamp(margin, right)
}

/// Signed correction from the label's pinned position back toward the true
/// pointer position: zero while the label floats freely, negative when pinned
/// at the left edge, positive when pinned at the right. The shell uses it to
/// keep the label's caret tracking the pointer while the body stays put.
pub fn arrow_offset(fraction: f64, chart_width: f32, label_width: f32, margin: f32) -> f32 {
    let raw = fraction as f32 * chart_width - label_width * 0.5;
    let right = (chart_width - label_width - margin).max(margin);
    if raw < margin {
        raw - margin
    } else if raw > right {
        raw - right
    } else {
        0.0
    }
}
