use crate::StudentRecord;
use std::collections::BTreeSet;

/// The joined census table as loaded at session start.
///
/// There is no mutable access: once a `RawTable` is built it
/// stays as loaded for the lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    records: Vec<StudentRecord>,
}

impl RawTable {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        log::debug!("[Census] model: RawTable built with {} records", records.len());
        Self { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest `AgeSurveyed` in the table, or `None` when empty.
    pub fn age_domain(&self) -> Option<(i64, i64)> {
        let min = self.records.iter().map(|r| r.age_surveyed).min()?;
        let max = self.records.iter().map(|r| r.age_surveyed).max()?;
        Some((min, max))
    }

    /// Distinct `AgeSurveyed` values in ascending order (the slider stops).
    pub fn distinct_ages(&self) -> Vec<i64> {
        self.records
            .iter()
            .map(|r| r.age_surveyed)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<StudentRecord>> for RawTable {
    fn from(records: Vec<StudentRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RawTable {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BirthMonth;

    fn record(id: i64, age: i64) -> StudentRecord {
        StudentRecord::demographic(id, None, age, 2020, BirthMonth::March)
    }

    #[test]
    fn age_domain_of_empty_table_is_none() {
        assert_eq!(RawTable::default().age_domain(), None);
        assert!(RawTable::default().distinct_ages().is_empty());
    }

    #[test]
    fn age_domain_spans_min_and_max() {
        let table = RawTable::new(vec![record(1, 14), record(2, 11), record(3, 17), record(4, 11)]);
        assert_eq!(table.age_domain(), Some((11, 17)));
    }

    #[test]
    fn distinct_ages_are_sorted_and_unique() {
        let table = RawTable::new(vec![record(1, 14), record(2, 11), record(3, 14), record(4, 12)]);
        assert_eq!(table.distinct_ages(), vec![11, 12, 14]);
    }

    #[test]
    fn preserves_load_order() {
        let table = RawTable::from(vec![record(3, 10), record(1, 10), record(2, 10)]);
        let ids: Vec<i64> = table.iter().map(|r| r.student_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}
