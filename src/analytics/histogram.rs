use crate::analytics::series::Histogram;
use crate::record::Record;

/// Number of buckets; width 0.1 each, covering returns in [-0.05, 1.05).
const BIN_COUNT: usize = 11;

/// Fixed-width histogram over the return field.
///
/// Bucket index is `floor((ret + 0.05) * 10)` clamped to [0, 10]:
/// outliers fold silently into the boundary buckets instead of erroring.
/// Labels are the lower bucket edges to two decimals.
pub fn return_histogram(records: &[Record]) -> Histogram {
    let mut counts = vec![0u64; BIN_COUNT];
    for record in records {
        let raw = ((record.ret + 0.05) * 10.0).floor();
        let bucket = raw.clamp(0.0, (BIN_COUNT - 1) as f64) as usize;
        counts[bucket] += 1;
    }

    let labels = (0..BIN_COUNT)
        .map(|i| format!("{:.2}", i as f64 / 10.0 - 0.05))
        .collect();

    Histogram { labels, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(ret: f64) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            strategy: "Dynamic".to_string(),
            ret,
            beta: 0.0,
            correlation: 0.0,
            equity: 100.0,
        }
    }

    #[test]
    fn test_small_return_lands_in_first_bucket() {
        // floor((0.004 + 0.05) * 10) = floor(0.54) = 0
        let hist = return_histogram(&[rec(0.004)]);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[1..].iter().sum::<u64>(), 0);
    }

    #[test]
    fn test_outliers_clamp_to_boundary_buckets() {
        let hist = return_histogram(&[rec(-0.5), rec(-0.051), rec(2.0), rec(1.05)]);
        assert_eq!(hist.counts[0], 2, "below -0.05 folds into bucket 0");
        assert_eq!(hist.counts[10], 2, "at or above 1.05 folds into bucket 10");
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let records: Vec<Record> = [-1.0, -0.04, 0.0, 0.1, 0.55, 0.99, 3.0]
            .iter()
            .map(|r| rec(*r))
            .collect();
        let hist = return_histogram(&records);
        assert_eq!(hist.counts.iter().sum::<u64>(), records.len() as u64);
        assert_eq!(hist.counts.len(), 11);
        assert_eq!(hist.labels.len(), 11);
    }

    #[test]
    fn test_labels_are_lower_edges() {
        let hist = return_histogram(&[]);
        assert_eq!(hist.labels[0], "-0.05");
        assert_eq!(hist.labels[1], "0.05");
        assert_eq!(hist.labels[10], "0.95");
        assert!(hist.counts.iter().all(|c| *c == 0));
    }
}
