use crate::analytics::group::sorted_by_date;
use crate::analytics::series::{round2, PointSeries};
use crate::record::Record;

/// Trailing window width for the rolling correlation view.
const WINDOW: usize = 5;

/// Trailing average of the correlation field over the chronologically
/// sorted records.
///
/// The first `WINDOW - 1` positions are skipped, not padded, so the
/// output is shorter than the input by `WINDOW - 1`; fewer than `WINDOW`
/// records yield an empty series. Each value rounds to two decimals.
pub fn rolling_correlation(records: &[Record]) -> PointSeries {
    let sorted = sorted_by_date(records);

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for i in 0..sorted.len() {
        if i + 1 < WINDOW {
            continue;
        }
        let window = &sorted[i + 1 - WINDOW..=i];
        let avg = window.iter().map(|r| r.correlation).sum::<f64>() / window.len() as f64;
        labels.push(sorted[i].date_label());
        values.push(round2(avg));
    }

    PointSeries { labels, values }
}
