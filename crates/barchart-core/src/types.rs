// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (margins, label metrics, magnify factors).

/// Default drawable chart width, in layout units.
pub const WIDTH: f32 = 300.0;

/// Pointer sentinel meaning "no active pointer".
pub const POINTER_NONE: f64 = -1.0;

/// Outer padding reserved off the available width before bars are laid out.
pub const OUTER_MARGIN: f32 = 22.0;

/// Width of the floating value label.
pub const LABEL_WIDTH: f32 = 100.0;

/// Minimum clearance between the floating label and either chart edge.
pub const LABEL_MARGIN: f32 = 10.0;

/// Horizontal scale applied to the active bar.
pub const MAGNIFY_X: f32 = 1.4;
/// Vertical scale applied to the active bar.
pub const MAGNIFY_Y: f32 = 1.1;

/// Per-bar scale multiplier pair, anchored at the bar's base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleXY {
    pub x: f32,
    pub y: f32,
}

impl ScaleXY {
    /// The resting scale of every non-active bar.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for ScaleXY {
    fn default() -> Self {
        Self::IDENTITY
    }
}
