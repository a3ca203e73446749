// dashboard.rs
//
// The whole page, start to finish. Runs once per request; nothing is
// cached between renders.

use crate::charts::build_bar_chart;
use crate::config::Config;
use crate::domain::{rank_by_total_value, ListingSummary, PRICE_BUCKETS};
use crate::errors::ServerError;
use crate::geos::load_boundaries;
use crate::maps::build_map;
use crate::spreadsheets::load_listings;
use crate::templates::pages::{dashboard_page, preview::PREVIEW_ROWS, DashboardVm};
use maud::Markup;
use std::time::Instant;
use tracing::info;

pub fn build_dashboard(config: &Config) -> Result<DashboardVm, ServerError> {
    let listings = load_listings(&config.listings_path)?;

    let ranked = rank_by_total_value(&listings);
    let chart = build_bar_chart(&ranked, &PRICE_BUCKETS);

    let boundaries = load_boundaries(&config.boundaries_path)?;
    let map = build_map(&listings, &boundaries);

    Ok(DashboardVm {
        chart: chart.to_plotly(),
        map: map.to_leaflet()?,
        summary: ListingSummary::from_listings(&listings),
        preview: listings.iter().take(PREVIEW_ROWS).cloned().collect(),
        polygon_count: map.polygon_count(),
        marker_count: map.marker_count(),
        skipped: map.skipped,
    })
}

pub fn render_dashboard(config: &Config) -> Result<Markup, ServerError> {
    let started = Instant::now();
    let vm = build_dashboard(config)?;
    let page = dashboard_page(&vm);

    info!(
        bars = vm.summary.rows,
        markers = vm.marker_count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dashboard rendered"
    );

    Ok(page)
}
