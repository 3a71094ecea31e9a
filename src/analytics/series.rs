use smallvec::SmallVec;

/// Fixed chart palette. A series' color is assigned by its group's
/// first-seen index modulo the palette length, so re-deriving a view
/// never reshuffles colors.
pub const PALETTE: [&str; 6] = [
    "#1e88e5", "#f27f3d", "#43a047", "#8e24aa", "#3949ab", "#00897b",
];

/// Month labels for the seasonality grid, calendar order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[inline]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Round to two decimals, the display precision of every derived value.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One bar series of the monthly grid: a value per calendar month.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CategorySeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// Month labels × per-strategy value arrays.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MonthlyGrid {
    pub months: Vec<&'static str>,
    pub datasets: Vec<CategorySeries>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Paired label/value series (rolling correlation, beta and drawdown views).
#[derive(Debug, Clone, serde::Serialize)]
pub struct PointSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One line series with its own date axis.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CurveSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// Per-strategy curve bundle. Dashboards typically carry three
/// strategies, so the bundle stays on the stack.
pub type CurveBundle = SmallVec<[CurveSeries; 4]>;

/// Per-strategy summary card, values pre-formatted for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct KpiRow {
    pub strategy: String,
    pub cagr: String,
    pub vol: String,
    pub max_drawdown: String,
}
