// File: crates/barchart-core/src/chart.rs
// Summary: BarChart engine composing series, pointer mapping, layout, magnify
// and label placement behind the surface the presentation shell consumes.

use crate::error::ChartResult;
use crate::label;
use crate::layout::{layout, LayoutMetrics};
use crate::magnify::MagnifyController;
use crate::normalize::normalize;
use crate::pointer::PointerState;
use crate::series::SeriesSource;
use crate::types::{ScaleXY, LABEL_MARGIN, LABEL_WIDTH, MAGNIFY_X, MAGNIFY_Y, OUTER_MARGIN, WIDTH};

/// Tunable engine knobs. Defaults reproduce the stock visual behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    /// Outer padding reserved before laying out bars.
    pub margin: f32,
    /// Floating value label width.
    pub label_width: f32,
    /// Minimum clearance between the label and either chart edge.
    pub label_margin: f32,
    /// Scale applied to the active bar.
    pub magnify: ScaleXY,
    /// Capability flag supplied by the shell; when false the hover entry
    /// points are no-ops and drag behavior is unchanged.
    pub supports_hover: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: OUTER_MARGIN,
            label_width: LABEL_WIDTH,
            label_margin: LABEL_MARGIN,
            magnify: ScaleXY::new(MAGNIFY_X, MAGNIFY_Y),
            supports_hover: true,
        }
    }
}

/// Hooks the shell can install to refresh itself when the data or the
/// highlighted bar changes. The engine works identically with none installed;
/// a polling shell simply reads the outputs every render.
pub trait ChartObserver {
    fn series_changed(&mut self) {}
    fn selection_changed(&mut self, _active: Option<usize>) {}
}

/// One interactive bar chart instance: a series source, the available width,
/// and the pointer-driven magnify state. All computation is synchronous;
/// events must be delivered in arrival order by the hosting framework.
pub struct BarChart<S: SeriesSource> {
    series: S,
    width: f32,
    options: ChartOptions,
    magnify: MagnifyController,
    observer: Option<Box<dyn ChartObserver>>,
    last_selection: Option<usize>,
}

impl<S: SeriesSource> BarChart<S> {
    pub fn new(series: S) -> Self {
        Self {
            series,
            width: WIDTH,
            options: ChartOptions::default(),
            magnify: MagnifyController::new(),
            observer: None,
            last_selection: None,
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn set_observer(&mut self, observer: Box<dyn ChartObserver>) {
        self.observer = Some(observer);
    }

    pub fn series(&self) -> &S {
        &self.series
    }

    // ---- inputs -------------------------------------------------------------

    /// Replace the series wholesale. A selection referencing an index past
    /// the new end re-clamps on the next derivation; it never reads out of
    /// bounds.
    pub fn set_series(&mut self, series: S) {
        self.series = series;
        self.series_replaced();
    }

    /// Signal that a shared series handle was mutated externally. Re-derives
    /// the selection against the new data and notifies the observer.
    pub fn series_replaced(&mut self) {
        if let Some(obs) = self.observer.as_mut() {
            obs.series_changed();
        }
        self.sync_selection();
    }

    pub fn set_available_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    pub fn on_pointer_down(&mut self, fraction: f64) {
        self.on_pointer_move(fraction);
    }

    pub fn on_pointer_move(&mut self, fraction: f64) {
        if self.magnify.drag_move(fraction) {
            self.sync_selection();
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.magnify.drag_end();
        self.sync_selection();
    }

    /// Hover entered bar `index`; magnifies at the bar's center fraction.
    pub fn on_hover_enter(&mut self, index: usize) {
        if !self.options.supports_hover {
            return;
        }
        if self.magnify.hover_enter(index, self.series.len()) {
            self.sync_selection();
        }
    }

    /// Hover-driven magnify at an explicit fraction. A sentinel fraction
    /// (stale per-bar leave callback) is a no-op, never a reset, which is
    /// what keeps adjacent-bar hover transitions from flickering to Idle.
    pub fn on_magnify_request(&mut self, fraction: f64) {
        if !self.options.supports_hover {
            return;
        }
        if self.magnify.drag_move(fraction) {
            self.sync_selection();
        }
    }

    /// Pointer left the whole chart.
    pub fn on_hover_exit(&mut self) {
        if !self.options.supports_hover {
            return;
        }
        self.magnify.hover_exit();
        self.sync_selection();
    }

    // ---- outputs (read every render) ---------------------------------------

    pub fn bar_count(&self) -> usize {
        self.series.len()
    }

    pub fn layout_metrics(&self) -> LayoutMetrics {
        layout(self.series.len(), self.width, self.options.margin)
    }

    pub fn bar_spacing(&self) -> f32 {
        self.layout_metrics().gap
    }

    pub fn per_bar_scale(&self, index: usize) -> ScaleXY {
        self.magnify.scale_for(index, self.series.len(), self.options.magnify)
    }

    /// Bar height as a fraction of the series maximum, in `[0, 1]`.
    pub fn normalized_height(&self, index: usize) -> ChartResult<f64> {
        let value = self.series.value_at(index)?;
        Ok(normalize(value, self.series.max_value()))
    }

    pub fn is_active(&self) -> bool {
        self.magnify.is_active(self.series.len())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.magnify.active_index(self.series.len())
    }

    pub fn active_value(&self) -> Option<f64> {
        let i = self.active_index()?;
        self.series.value_at(i).ok()
    }

    pub fn active_label(&self) -> Option<String> {
        let i = self.active_index()?;
        self.series.label_at(i).ok()
    }

    pub fn pointer(&self) -> PointerState {
        self.magnify.pointer()
    }

    pub fn label_offset(&self) -> f32 {
        label::label_offset(
            self.magnify.pointer().raw(),
            self.width,
            self.options.label_width,
            self.options.label_margin,
        )
    }

    pub fn arrow_offset(&self) -> f32 {
        label::arrow_offset(
            self.magnify.pointer().raw(),
            self.width,
            self.options.label_width,
            self.options.label_margin,
        )
    }

    // ---- internals ----------------------------------------------------------

    /// Fires `selection_changed` only on actual transitions, so repeated
    /// events for the same bar stay quiet.
    fn sync_selection(&mut self) {
        let current = self.magnify.active_index(self.series.len());
        if current != self.last_selection {
            self.last_selection = current;
            if let Some(obs) = self.observer.as_mut() {
                obs.selection_changed(current);
            }
        }
    }
}
