use crate::errors::{DashResult, DashboardError};
use crate::record::{coerce_numeric, parse_date, Record};

/// Delimiter for an uploaded file, chosen by extension the way the
/// dashboard's file picker does.
pub fn delimiter_for(file_name: &str) -> char {
    if file_name.ends_with(".tsv") {
        '\t'
    } else {
        ','
    }
}

/// Parse delimited text into records.
///
/// The first non-empty line is the header; cells are split on the
/// delimiter and trimmed. Missing or non-numeric cells coerce to their
/// field defaults. Rows whose date fails to parse are dropped with a
/// warning so downstream chronological sorts stay total.
pub fn parse_delimited(text: &str, delimiter: char) -> DashResult<Vec<Record>> {
    let mut lines = text.trim().lines();

    let header_line = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| DashboardError::Ingest("upload has no header row".to_string()))?;
    let headers: Vec<&str> = header_line.split(delimiter).map(str::trim).collect();

    let column = |name: &str| headers.iter().position(|h| *h == name);
    let date_col = column("Date");
    let strategy_col = column("Hedge");
    let ret_col = column("Return");
    let beta_col = column("Beta");
    let corr_col = column("Correlation");
    let equity_col = column("Equity");

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(delimiter).collect();
        let cell = |col: Option<usize>| col.and_then(|i| cells.get(i).copied());

        let date = match cell(date_col).and_then(parse_date) {
            Some(date) => date,
            None => {
                dropped += 1;
                continue;
            }
        };

        records.push(Record {
            date,
            strategy: cell(strategy_col).map(str::trim).unwrap_or_default().to_string(),
            ret: coerce_numeric(cell(ret_col), 0.0),
            beta: coerce_numeric(cell(beta_col), 0.0),
            correlation: coerce_numeric(cell(corr_col), 0.0),
            equity: coerce_numeric(cell(equity_col), 100.0),
        });
    }

    if dropped > 0 {
        tracing::warn!(dropped, "rows dropped: unparseable date");
    }

    Ok(records)
}
