use crate::analytics::group::{group_by_strategy, sorted_by_date};
use crate::analytics::series::{palette_color, round2, CurveBundle, CurveSeries};
use crate::record::Record;

/// Starting reference level for compounded curves. It acts as the
/// "previous" value of the first period: the first emitted point already
/// reflects one period of compounding, and no day-0 point is kept.
const BASE_LEVEL: f64 = 100.0;

/// Compound each strategy's returns into a cumulative index series,
/// ascending by date. Accumulation is unrounded; emitted values round
/// to two decimals.
pub fn equity_curves(records: &[Record]) -> CurveBundle {
    group_by_strategy(records)
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let sorted = sorted_by_date(&group.rows);
            let mut level = BASE_LEVEL;
            let mut labels = Vec::with_capacity(sorted.len());
            let mut values = Vec::with_capacity(sorted.len());
            for row in &sorted {
                level *= 1.0 + row.ret;
                labels.push(row.date_label());
                values.push(round2(level));
            }
            CurveSeries {
                label: group.name.clone(),
                labels,
                values,
                color: palette_color(index),
            }
        })
        .collect()
}
