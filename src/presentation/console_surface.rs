// Console chart surface for headless runs
use crate::application::chart_surface::ChartSurface;
use crate::domain::series::ChartUpdate;

/// Narrates chart state through tracing instead of drawing on a canvas.
/// Used by the binary; an embedding host supplies its own surface.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ChartSurface for ConsoleSurface {
    fn apply(&self, chart_id: &str, update: ChartUpdate) {
        let point_total: usize = update.datasets.iter().map(|s| s.points.len()).sum();
        tracing::info!(
            "chart {}: \"{}\" with {} series, {} points",
            chart_id,
            update.title,
            update.datasets.len(),
            point_total
        );
        for series in &update.datasets {
            tracing::debug!(
                "  {} ({}): {} points, visible={}, color={:?}",
                series.label,
                series.category_code,
                series.points.len(),
                series.visible_by_default,
                series.color
            );
        }
        if let Some((min, max)) = update.x_bounds {
            tracing::debug!("  x-bounds {} .. {}", min, max);
        }
    }

    fn set_loading(&self, chart_id: &str, loading: bool) {
        tracing::debug!("chart {} loading: {}", chart_id, loading);
    }

    fn set_error(&self, chart_id: &str, reason: Option<&str>) {
        if let Some(reason) = reason {
            tracing::error!("chart {}: {}", chart_id, reason);
        }
    }

    fn set_controls_enabled(&self, enabled: bool) {
        tracing::debug!("range controls enabled: {}", enabled);
    }
}
