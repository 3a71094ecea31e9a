use crate::analytics::group::{group_by_strategy, sorted_by_date};
use crate::analytics::series::{palette_color, CurveBundle, CurveSeries, PointSeries};
use crate::record::Record;

/// Raw beta pass-through: full input, original order. The dashboard
/// titles this "Rolling Beta" but no rolling computation happens.
pub fn beta_series(records: &[Record]) -> PointSeries {
    PointSeries {
        labels: records.iter().map(|r| r.date_label()).collect(),
        values: records.iter().map(|r| r.beta).collect(),
    }
}

/// Per-strategy series of raw equity field values, ascending by date.
/// A direct projection of the input, not a compounded curve.
pub fn sensitivity_curves(records: &[Record]) -> CurveBundle {
    equity_projection(records, "")
}

/// The sensitivity projection with a scenario suffix on each label, so
/// two stress scenarios render side by side. The transformation itself
/// does not differ between scenarios; scenario-specific data is the
/// caller's responsibility.
pub fn stress_curves(records: &[Record], label_suffix: &str) -> CurveBundle {
    equity_projection(records, label_suffix)
}

fn equity_projection(records: &[Record], label_suffix: &str) -> CurveBundle {
    group_by_strategy(records)
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let sorted = sorted_by_date(&group.rows);
            CurveSeries {
                label: format!("{} {}", group.name, label_suffix).trim().to_string(),
                labels: sorted.iter().map(|r| r.date_label()).collect(),
                values: sorted.iter().map(|r| r.equity).collect(),
                color: palette_color(index),
            }
        })
        .collect()
}

/// Raw return per date, original order. Kept under the dashboard's
/// "Drawdown" title even though it is not a peak-to-trough series.
pub fn drawdown_series(records: &[Record]) -> PointSeries {
    PointSeries {
        labels: records.iter().map(|r| r.date_label()).collect(),
        values: records.iter().map(|r| r.ret).collect(),
    }
}
