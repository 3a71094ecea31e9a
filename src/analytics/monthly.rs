use crate::analytics::group::group_by_strategy;
use crate::analytics::series::{palette_color, CategorySeries, MonthlyGrid, MONTHS};
use crate::record::Record;
use chrono::Datelike;

/// Average return per calendar month (Jan-Dec) for each strategy group.
///
/// Months are not year-scoped: multi-year data aggregates same-month
/// observations together. An empty month stays at 0 (denominator guarded
/// to 1). Values are percentage-scaled and rounded to two decimals.
pub fn monthly_grid(records: &[Record]) -> MonthlyGrid {
    let datasets = group_by_strategy(records)
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let mut values = Vec::with_capacity(MONTHS.len());
            for month in 0..MONTHS.len() as u32 {
                let mut sum = 0.0;
                let mut count = 0usize;
                for row in &group.rows {
                    if row.date.month0() == month {
                        sum += row.ret;
                        count += 1;
                    }
                }
                let avg = sum / count.max(1) as f64;
                values.push((avg * 10000.0).round() / 100.0);
            }
            CategorySeries {
                label: group.name.clone(),
                values,
                color: palette_color(index),
            }
        })
        .collect();

    MonthlyGrid {
        months: MONTHS.to_vec(),
        datasets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::series::PALETTE;
    use chrono::NaiveDate;

    fn rec(year: i32, month: u32, day: u32, strategy: &str, ret: f64) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            strategy: strategy.to_string(),
            ret,
            beta: 0.0,
            correlation: 0.0,
            equity: 100.0,
        }
    }

    #[test]
    fn test_single_january_record() {
        let grid = monthly_grid(&[rec(2023, 1, 2, "Dynamic", 0.002)]);
        assert_eq!(grid.datasets.len(), 1);
        let values = &grid.datasets[0].values;
        assert_eq!(values[0], 0.2, "January average should be 0.20%");
        assert!(values[1..].iter().all(|v| *v == 0.0), "empty months stay 0");
    }

    #[test]
    fn test_months_aggregate_across_years() {
        let grid = monthly_grid(&[
            rec(2022, 1, 10, "Dynamic", 0.01),
            rec(2023, 1, 12, "Dynamic", 0.03),
        ]);
        assert_eq!(grid.datasets[0].values[0], 2.0, "two Januaries average to 2%");
    }

    #[test]
    fn test_month_labels_and_colors() {
        let grid = monthly_grid(&[
            rec(2023, 1, 2, "Dynamic", 0.0),
            rec(2023, 1, 3, "Static", 0.0),
        ]);
        assert_eq!(grid.months.len(), 12);
        assert_eq!(grid.months[0], "Jan");
        assert_eq!(grid.months[11], "Dec");
        assert_eq!(grid.datasets[0].color, PALETTE[0]);
        assert_eq!(grid.datasets[1].color, PALETTE[1]);
    }

    #[test]
    fn test_average_is_per_group() {
        let grid = monthly_grid(&[
            rec(2023, 2, 2, "A", 0.01),
            rec(2023, 2, 3, "A", 0.03),
            rec(2023, 2, 4, "B", 0.05),
        ]);
        assert_eq!(grid.datasets[0].values[1], 2.0);
        assert_eq!(grid.datasets[1].values[1], 5.0);
    }
}
