// Chart synchronization controller - The one owner of the shared date range
use crate::application::chart_surface::ChartSurface;
use crate::application::fetcher::{FetchError, SeriesFetcher};
use crate::application::transform::{self, TransformError};
use crate::domain::range::DateRange;
use crate::domain::series::{CategorySeries, ChartUpdate};
use crate::infrastructure::config::render_template;
use chrono_tz::Tz;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Where one chart's data comes from and how it becomes plottable.
#[derive(Debug, Clone)]
pub enum SourceSpec {
    Generation {
        url: String,
        /// `None` shows every category; `Some(codes)` hides the rest.
        default_visible: Option<Vec<String>>,
    },
    TotalLoad {
        forecast_url: String,
        actual_url: String,
    },
    RenewableShare {
        url: String,
    },
}

/// One dashboard panel, built once at startup and never rebuilt. Only the
/// rendered chart's dataset state changes afterwards, and the controller
/// replaces that wholesale on every range change.
#[derive(Debug, Clone)]
pub struct ChartBinding {
    pub chart_id: String,
    /// Title with `${start}`/`${end}` placeholders for the formatted range.
    pub title_template: String,
    pub source: SourceSpec,
}

#[derive(Debug, Error)]
enum LegError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Transform(#[from] TransformError),
}

/// Orchestrates fetch -> transform -> render for every bound chart around a
/// single shared date range.
///
/// `set_range` takes `&mut self`, so range changes serialize: a new change
/// cannot start until every leg of the previous one has settled, and a stale
/// fetch can never overwrite a newer render.
pub struct ChartSyncController {
    fetcher: Arc<dyn SeriesFetcher>,
    surface: Arc<dyn ChartSurface>,
    bindings: Vec<ChartBinding>,
    tz: Tz,
    compact: bool,
    range: DateRange,
}

impl ChartSyncController {
    pub fn new(
        fetcher: Arc<dyn SeriesFetcher>,
        surface: Arc<dyn ChartSurface>,
        bindings: Vec<ChartBinding>,
        tz: Tz,
        compact: bool,
        initial_range: DateRange,
    ) -> Self {
        Self {
            fetcher,
            surface,
            bindings,
            tz,
            compact,
            range: initial_range,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Sole mutation entry point. Disables the shared range controls, runs
    /// one leg per chart concurrently, and re-enables the controls only once
    /// every leg has reached success or error. Legs are independent: one
    /// chart's failure neither blocks nor aborts the others. Calling this
    /// twice with the same range simply re-fetches and re-renders.
    pub async fn set_range(&mut self, range: DateRange) {
        self.range = range;
        tracing::debug!(
            "range change: {} .. {}",
            range.start,
            range.end
        );

        self.surface.set_controls_enabled(false);
        let legs = self
            .bindings
            .iter()
            .map(|binding| self.run_leg(binding, range));
        join_all(legs).await;
        self.surface.set_controls_enabled(true);
    }

    /// Move the range start by whole days, then reload. Nothing more than a
    /// boundary-date mutation in front of `set_range`.
    pub async fn step_start(&mut self, days: i64) {
        self.set_range(self.range.with_start_stepped(days)).await;
    }

    /// Move the range end by whole days, then reload.
    pub async fn step_end(&mut self, days: i64) {
        self.set_range(self.range.with_end_stepped(days)).await;
    }

    async fn run_leg(&self, binding: &ChartBinding, range: DateRange) {
        self.surface.set_loading(&binding.chart_id, true);
        self.surface.set_error(&binding.chart_id, None);

        match self.load_datasets(&binding.source, &range).await {
            Ok(datasets) => {
                let update = ChartUpdate {
                    title: self.render_title(&binding.title_template, &range),
                    datasets,
                    x_bounds: (!self.compact).then(|| range.axis_bounds(self.tz)),
                };
                self.surface.apply(&binding.chart_id, update);
            }
            Err(err) => {
                tracing::warn!("chart {} failed: {}", binding.chart_id, err);
                self.surface.set_error(
                    &binding.chart_id,
                    Some(&format!("An error occurred: {err}")),
                );
            }
        }

        self.surface.set_loading(&binding.chart_id, false);
    }

    async fn load_datasets(
        &self,
        source: &SourceSpec,
        range: &DateRange,
    ) -> Result<Vec<CategorySeries>, LegError> {
        match source {
            SourceSpec::Generation {
                url,
                default_visible,
            } => {
                let raw = self.fetcher.fetch(url, range).await?;
                Ok(transform::generation_series(raw, default_visible.as_deref())?)
            }
            SourceSpec::TotalLoad {
                forecast_url,
                actual_url,
            } => {
                // Both load feeds belong to one chart, so they share a leg;
                // either failing fails only this chart.
                let forecast = self.fetcher.fetch(forecast_url, range).await?;
                let actual = self.fetcher.fetch(actual_url, range).await?;
                Ok(transform::total_load_series(forecast, actual)?)
            }
            SourceSpec::RenewableShare { url } => {
                let raw = self.fetcher.fetch(url, range).await?;
                Ok(transform::renewable_share_series(raw)?)
            }
        }
    }

    fn render_title(&self, template: &str, range: &DateRange) -> String {
        let (start, end) = range.formatted();
        let mut vars = HashMap::new();
        vars.insert("start".to_string(), start);
        vars.insert("end".to_string(), end);
        render_template(template, &vars)
    }
}
