use crate::record::Record;
use chrono::NaiveDate;

/// Built-in demo rows, seeded at startup so every view renders before
/// the first upload.
const DEMO_ROWS: [(i32, u32, u32, &str, f64, f64, f64, f64); 9] = [
    (2023, 1, 2, "Dynamic", 0.002, 1.2, 0.8, 100.0),
    (2023, 1, 3, "Static", -0.001, 0.9, 0.82, 101.0),
    (2023, 1, 4, "Unhedged", 0.004, 1.4, 0.78, 103.0),
    (2023, 2, 2, "Dynamic", 0.005, 0.8, 0.76, 104.0),
    (2023, 2, 3, "Static", 0.002, 1.1, 0.74, 106.0),
    (2023, 3, 3, "Unhedged", -0.003, 1.3, 0.7, 105.0),
    (2023, 3, 4, "Dynamic", 0.006, 0.7, 0.68, 108.0),
    (2023, 4, 5, "Static", -0.002, 1.05, 0.69, 107.0),
    (2023, 4, 6, "Unhedged", 0.003, 1.2, 0.67, 109.0),
];

pub fn demo_dataset() -> Vec<Record> {
    DEMO_ROWS
        .iter()
        .map(|&(year, month, day, strategy, ret, beta, correlation, equity)| Record {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            strategy: strategy.to_string(),
            ret,
            beta,
            correlation,
            equity,
        })
        .collect()
}
