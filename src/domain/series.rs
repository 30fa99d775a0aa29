// Plotting data domain models
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: DateTime<Utc>, y: f64) -> Self {
        Self { x, y }
    }
}

/// One plottable line: a labeled, ordered point list with optional styling.
///
/// `color`/`border_color` are `None` when the category code has no entry in
/// the color catalog; the chart then falls back to its own default styling.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub category_code: String,
    pub label: String,
    pub points: Vec<SeriesPoint>,
    pub color: Option<String>,
    pub border_color: Option<String>,
    pub visible_by_default: bool,
}

/// The uniform shape handed to a chart on a successful range change. The
/// receiving chart replaces its datasets, title and x-bounds in place and
/// redraws; it is never recreated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub title: String,
    pub datasets: Vec<CategorySeries>,
    /// `None` leaves the chart's existing axis bounds untouched
    /// (compact layout).
    pub x_bounds: Option<(DateTime<Utc>, DateTime<Utc>)>,
}
