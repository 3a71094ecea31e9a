use crate::record::Record;

/// Records sharing one strategy label, in their original relative order.
#[derive(Debug, Clone)]
pub struct StrategyGroup {
    pub name: String,
    pub rows: Vec<Record>,
}

/// Partition records by strategy label.
///
/// Keys keep first-seen order (a group's position doubles as its palette
/// index) and rows keep their relative input order. No filtering, no
/// deduplication. Group counts stay small, so the lookup is a linear scan.
pub fn group_by_strategy(records: &[Record]) -> Vec<StrategyGroup> {
    let mut groups: Vec<StrategyGroup> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g.name == record.strategy) {
            Some(group) => group.rows.push(record.clone()),
            None => groups.push(StrategyGroup {
                name: record.strategy.clone(),
                rows: vec![record.clone()],
            }),
        }
    }
    groups
}

/// Clone and sort ascending by date. The sort is stable: records on the
/// same date keep their relative input order.
pub fn sorted_by_date(rows: &[Record]) -> Vec<Record> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|r| r.date);
    sorted
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
    fn test_first_seen_key_order() {
        let records = vec![
            rec(2, "Dynamic", 0.01),
            rec(3, "Static", 0.02),
            rec(4, "Dynamic", 0.03),
            rec(5, "Unhedged", 0.04),
        ];
        let groups = group_by_strategy(&records);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Dynamic", "Static", "Unhedged"]);
    }

    #[test]
    fn test_groups_preserve_relative_order() {
        let records = vec![
            rec(2, "A", 0.1),
            rec(3, "B", 0.2),
            rec(4, "A", 0.3),
            rec(5, "B", 0.4),
            rec(6, "A", 0.5),
        ];
        let groups = group_by_strategy(&records);
        let a: Vec<f64> = groups[0].rows.iter().map(|r| r.ret).collect();
        let b: Vec<f64> = groups[1].rows.iter().map(|r| r.ret).collect();
        assert_eq!(a, vec![0.1, 0.3, 0.5]);
        assert_eq!(b, vec![0.2, 0.4]);

        // Concatenating all groups reproduces exactly the input records
        let total: usize = groups.iter().map(|g| g.rows.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_empty_input_no_groups() {
        assert!(group_by_strategy(&[]).is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_date_ties() {
        let mut tie_a = rec(2, "A", 0.1);
        let mut tie_b = rec(2, "A", 0.2);
        tie_a.beta = 1.0;
        tie_b.beta = 2.0;
        let sorted = sorted_by_date(&[rec(9, "A", 0.9), tie_a, tie_b]);
        assert_eq!(sorted[0].beta, 1.0);
        assert_eq!(sorted[1].beta, 2.0);
        assert_eq!(sorted[2].ret, 0.9);
    }
}
