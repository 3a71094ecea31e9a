use chrono::NaiveDate;

/// One observation of hedging strategy performance.
///
/// Immutable once constructed. Numeric coercion happens exactly once, at
/// construction time, so derivations never re-check their input fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub strategy: String,
    /// Fractional periodic return (0.002 = 0.2%)
    pub ret: f64,
    /// Pass-through sensitivity field; nothing derives it
    pub beta: f64,
    pub correlation: f64,
    /// Externally supplied index level, not derived from `ret`
    pub equity: f64,
}

impl Record {
    /// Date formatted the way every view labels its axis.
    #[inline]
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Date formats accepted from uploads, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a date cell. `None` means the record is dropped at ingest:
/// the analytics core only ever sees valid dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Coerce a numeric cell to its field default when missing, empty, or
/// non-numeric. Defaults never propagate NaN into arithmetic.
pub fn coerce_numeric(raw: Option<&str>, default: f64) -> f64 {
    raw.map(str::trim)
        .filter(|cell| !cell.is_empty())
        .and_then(|cell| cell.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        assert_eq!(parse_date("2023-01-02"), Some(expected));
        assert_eq!(parse_date("01/02/2023"), Some(expected));
        assert_eq!(parse_date("2023/01/02"), Some(expected));
        assert_eq!(parse_date("  2023-01-02  "), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2023-13-40"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_coerce_numeric_defaults() {
        assert_eq!(coerce_numeric(Some("0.5"), 0.0), 0.5);
        assert_eq!(coerce_numeric(Some(" 1.2 "), 0.0), 1.2);
        assert_eq!(coerce_numeric(Some("abc"), 0.0), 0.0);
        assert_eq!(coerce_numeric(Some(""), 0.0), 0.0);
        assert_eq!(coerce_numeric(None, 0.0), 0.0);
    }

    #[test]
    fn test_coerce_equity_default_is_100() {
        assert_eq!(coerce_numeric(None, 100.0), 100.0);
        assert_eq!(coerce_numeric(Some("n/a"), 100.0), 100.0);
        assert_eq!(coerce_numeric(Some("103"), 100.0), 103.0);
    }

    #[test]
    fn test_coerce_rejects_non_finite() {
        assert_eq!(coerce_numeric(Some("NaN"), 0.0), 0.0);
        assert_eq!(coerce_numeric(Some("inf"), 100.0), 100.0);
    }
}
