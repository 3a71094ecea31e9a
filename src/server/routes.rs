use crate::analytics::compound::equity_curves;
use crate::analytics::curves::{beta_series, drawdown_series, sensitivity_curves, stress_curves};
use crate::analytics::histogram::return_histogram;
use crate::analytics::kpi::strategy_kpis;
use crate::analytics::monthly::monthly_grid;
use crate::analytics::rolling::rolling_correlation;
use crate::analytics::series::{CurveBundle, Histogram, KpiRow, MonthlyGrid, PointSeries};
use crate::ingest;
use crate::record::Record;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use portable_atomic::Ordering;
use std::sync::Arc;

/// Everything the dashboard renders, derived in one pass over the
/// current dataset. Equity curves appear once; the frontend feeds them
/// to both the main equity chart and the static-vs-dynamic panel.
#[derive(Debug, serde::Serialize)]
pub struct DashboardStory {
    pub monthly: MonthlyGrid,
    pub histogram: Histogram,
    pub rolling_correlation: PointSeries,
    pub equity: CurveBundle,
    pub beta: PointSeries,
    pub kpis: Vec<KpiRow>,
    pub sensitivity: CurveBundle,
    pub stress_a: CurveBundle,
    pub stress_b: CurveBundle,
    pub drawdown: PointSeries,
}

/// Run every derivation over one record sequence. Each call is pure and
/// independent; this is the only place that composes them.
pub fn derive_story(records: &[Record]) -> DashboardStory {
    DashboardStory {
        monthly: monthly_grid(records),
        histogram: return_histogram(records),
        rolling_correlation: rolling_correlation(records),
        equity: equity_curves(records),
        beta: beta_series(records),
        kpis: strategy_kpis(records),
        sensitivity: sensitivity_curves(records),
        stress_a: stress_curves(records, "A"),
        stress_b: stress_curves(records, "B"),
        drawdown: drawdown_series(records),
    }
}

/// GET /api/story -- every derived view over the current dataset
pub async fn get_story(State(state): State<Arc<AppState>>) -> Json<DashboardStory> {
    let dataset = state.dataset();
    state.counters.stories_served.fetch_add(1, Ordering::Relaxed);
    Json(derive_story(&dataset))
}

/// GET /api/monthly -- seasonality grid
pub async fn get_monthly(State(state): State<Arc<AppState>>) -> Json<MonthlyGrid> {
    Json(monthly_grid(&state.dataset()))
}

/// GET /api/histogram -- return distribution
pub async fn get_histogram(State(state): State<Arc<AppState>>) -> Json<Histogram> {
    Json(return_histogram(&state.dataset()))
}

/// GET /api/correlation -- rolling correlation series
pub async fn get_correlation(State(state): State<Arc<AppState>>) -> Json<PointSeries> {
    Json(rolling_correlation(&state.dataset()))
}

/// GET /api/equity -- compounded equity curves
pub async fn get_equity(State(state): State<Arc<AppState>>) -> Json<CurveBundle> {
    Json(equity_curves(&state.dataset()))
}

/// GET /api/beta -- beta pass-through series
pub async fn get_beta(State(state): State<Arc<AppState>>) -> Json<PointSeries> {
    Json(beta_series(&state.dataset()))
}

/// GET /api/kpis -- per-strategy summary cards
pub async fn get_kpis(State(state): State<Arc<AppState>>) -> Json<Vec<KpiRow>> {
    Json(strategy_kpis(&state.dataset()))
}

/// GET /api/sensitivity -- raw equity projections
pub async fn get_sensitivity(State(state): State<Arc<AppState>>) -> Json<CurveBundle> {
    Json(sensitivity_curves(&state.dataset()))
}

#[derive(serde::Deserialize)]
pub struct StressQuery {
    pub scenario: Option<String>,
}

/// GET /api/stress -- stress projections; ?scenario=A labels one
/// scenario, otherwise both A and B are returned
pub async fn get_stress(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StressQuery>,
) -> Json<serde_json::Value> {
    let dataset = state.dataset();
    match params.scenario.as_deref() {
        Some(scenario) => Json(serde_json::json!({
            "scenario": scenario,
            "curves": stress_curves(&dataset, scenario),
        })),
        None => Json(serde_json::json!({
            "a": stress_curves(&dataset, "A"),
            "b": stress_curves(&dataset, "B"),
        })),
    }
}

/// GET /api/drawdown -- raw return series under the drawdown title
pub async fn get_drawdown(State(state): State<Arc<AppState>>) -> Json<PointSeries> {
    Json(drawdown_series(&state.dataset()))
}

#[derive(serde::Deserialize)]
pub struct UploadQuery {
    pub name: Option<String>,
}

/// POST /api/upload -- replace the dataset from a delimited-text body.
/// The delimiter follows the uploaded file name (.tsv = tab).
pub async fn post_upload(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadQuery>,
    body: String,
) -> Json<serde_json::Value> {
    let name = params.name.unwrap_or_default();
    let delimiter = ingest::csv::delimiter_for(&name);

    match ingest::csv::parse_delimited(&body, delimiter) {
        Ok(records) => {
            state.counters.uploads_accepted.fetch_add(1, Ordering::Relaxed);
            let source = if name.is_empty() { "upload" } else { name.as_str() };
            let (rows, strategies) = state.replace_dataset(records, source);
            tracing::info!(rows, strategies, file = %name, "dataset replaced from upload");
            Json(serde_json::json!({
                "rows": rows,
                "strategies": strategies,
                "source": source,
            }))
        }
        Err(e) => {
            state.counters.uploads_rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, file = %name, "upload rejected");
            Json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// GET /api/counters -- performance counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    use portable_atomic::Ordering::Relaxed;
    Json(serde_json::json!({
        "uploads_accepted": state.counters.uploads_accepted.load(Relaxed),
        "uploads_rejected": state.counters.uploads_rejected.load(Relaxed),
        "rows_ingested": state.counters.rows_ingested.load(Relaxed),
        "stories_served": state.counters.stories_served.load(Relaxed),
        "ws_messages_sent": state.counters.ws_messages_sent.load(Relaxed),
    }))
}
