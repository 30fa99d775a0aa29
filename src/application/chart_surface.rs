// Chart rendering boundary
use crate::domain::series::ChartUpdate;

/// Everything the controller needs from the rendering side: per-chart
/// dataset replacement plus the busy/error indicators and the shared range
/// controls. Charts are addressed by id and mutated in place; the surface
/// never recreates a chart on a range change.
pub trait ChartSurface: Send + Sync {
    /// Replace the chart's datasets, title and x-axis bounds, then redraw.
    /// Configured axes and scales survive the update.
    fn apply(&self, chart_id: &str, update: ChartUpdate);

    /// Toggle the chart's loading indicator.
    fn set_loading(&self, chart_id: &str, loading: bool);

    /// `Some(reason)` shows the chart's inline error message; `None` hides
    /// it. Showing an error leaves the previously rendered datasets alone.
    fn set_error(&self, chart_id: &str, reason: Option<&str>);

    /// Enable or disable the shared range controls. Global, not per chart.
    fn set_controls_enabled(&self, enabled: bool);
}
