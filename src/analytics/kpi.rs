use crate::analytics::group::group_by_strategy;
use crate::analytics::series::KpiRow;
use crate::record::Record;

/// Annualization factor: trading days per year.
const TRADING_DAYS: f64 = 252.0;

/// Per-strategy summary statistics, formatted for the KPI cards.
///
/// Volatility is the population standard deviation (divide by count,
/// not count - 1) and "max drawdown" is the single worst periodic
/// return in percent, not a peak-to-trough depth.
pub fn strategy_kpis(records: &[Record]) -> Vec<KpiRow> {
    group_by_strategy(records)
        .iter()
        .map(|group| {
            let returns: Vec<f64> = group.rows.iter().map(|r| r.ret).collect();
            kpi_row(&group.name, &returns)
        })
        .collect()
}

/// Summary row over one group's returns. Denominators are guarded to 1
/// so an empty slice formats as zeros instead of dividing by zero.
fn kpi_row(strategy: &str, returns: &[f64]) -> KpiRow {
    let denom = returns.len().max(1) as f64;
    let mean = returns.iter().sum::<f64>() / denom;
    let variance = returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / denom;
    let vol = variance.sqrt();

    let worst = returns.iter().copied().fold(f64::INFINITY, f64::min);
    let worst = if worst.is_finite() { worst } else { 0.0 };

    KpiRow {
        strategy: strategy.to_string(),
        cagr: format!("{:.2}", mean * TRADING_DAYS),
        vol: format!("{:.2}", vol * TRADING_DAYS.sqrt()),
        max_drawdown: format!("{:.2}", worst * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(day: u32, strategy: &str, ret: f64) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            strategy: strategy.to_string(),
            ret,
            beta: 0.0,
            correlation: 0.0,
            equity: 100.0,
        }
    }

    #[test]
    fn test_known_values() {
        let rows = strategy_kpis(&[rec(2, "Dynamic", 0.01), rec(3, "Dynamic", 0.03)]);
        assert_eq!(rows.len(), 1);
        // mean 0.02 * 252 = 5.04
        assert_eq!(rows[0].cagr, "5.04");
        // population std 0.01 * sqrt(252) = 0.1587... -> "0.16"
        assert_eq!(rows[0].vol, "0.16");
        // worst return 0.01 * 100
        assert_eq!(rows[0].max_drawdown, "1.00");
    }

    #[test]
    fn test_worst_return_is_the_minimum() {
        let rows = strategy_kpis(&[
            rec(2, "A", 0.05),
            rec(3, "A", -0.02),
            rec(4, "A", 0.01),
        ]);
        assert_eq!(rows[0].max_drawdown, "-2.00");
    }

    #[test]
    fn test_empty_group_formats_as_zeros() {
        let row = kpi_row("Dynamic", &[]);
        assert_eq!(row.cagr, "0.00");
        assert_eq!(row.vol, "0.00");
        assert_eq!(row.max_drawdown, "0.00");
    }

    #[test]
    fn test_one_row_per_group_in_first_seen_order() {
        let rows = strategy_kpis(&[
            rec(2, "Dynamic", 0.01),
            rec(3, "Static", 0.02),
            rec(4, "Dynamic", 0.03),
        ]);
        let names: Vec<&str> = rows.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(names, vec!["Dynamic", "Static"]);
    }
}
