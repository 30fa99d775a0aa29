// Main entry point - Dependency injection and the initial range load
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use chrono::Utc;

use crate::application::sync_controller::ChartSyncController;
use crate::domain::range::DateRange;
use crate::infrastructure::config::{load_dashboard_config, standard_bindings};
use crate::infrastructure::http_fetcher::HttpSeriesFetcher;
use crate::presentation::console_surface::ConsoleSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;
    let tz = config.display.parse_timezone()?;
    let bindings = standard_bindings(&config.sources);

    // Wire the controller: reqwest fetcher, console surface, chart bindings
    let fetcher = Arc::new(HttpSeriesFetcher::new());
    let surface = Arc::new(ConsoleSurface);

    // The range controls default to today, so the first load is today..today
    let today = DateRange::single_day(Utc::now().with_timezone(&tz).date_naive());
    tracing::info!("loading {} charts for {}", bindings.len(), today.start);

    let mut controller =
        ChartSyncController::new(fetcher, surface, bindings, tz, config.display.compact, today);
    controller.set_range(today).await;

    Ok(())
}
