use census_model::{BirthMonth, RawTable, StudentRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Inclusive bounds over `AgeSurveyed`.
///
/// `min > max` is representable and means "no age matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub min: i64,
    pub max: i64,
}

impl AgeRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: i64) -> bool {
        self.min <= age && age <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// The current value of both filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub months: BTreeSet<BirthMonth>,
    pub age_range: AgeRange,
    /// Ages observed at load time; setters keep the range inside it.
    domain: (i64, i64),
}

impl FilterSelection {
    /// A selection over an explicit age domain, with every month selected
    /// and the range covering the whole domain.
    pub fn with_domain(domain: (i64, i64)) -> Self {
        Self {
            months: BirthMonth::ALL.into_iter().collect(),
            age_range: AgeRange::new(domain.0, domain.1),
            domain,
        }
    }

    /// The age domain observed when the table was loaded.
    pub fn age_domain(&self) -> (i64, i64) {
        self.domain
    }

    pub fn is_month_selected(&self, month: BirthMonth) -> bool {
        self.months.contains(&month)
    }

    /// Select `month` if it is unselected, otherwise unselect it.
    pub fn toggle_month(&mut self, month: BirthMonth) {
        if !self.months.remove(&month) {
            self.months.insert(month);
        }
    }

    pub fn set_months<I>(&mut self, months: I)
    where
        I: IntoIterator<Item = BirthMonth>,
    {
        self.months = months.into_iter().collect();
    }

    pub fn select_all_months(&mut self) {
        self.months = BirthMonth::ALL.into_iter().collect();
    }

    pub fn clear_months(&mut self) {
        self.months.clear();
    }

    /// Move the lower bound, keeping the upper one.
    pub fn set_age_min(&mut self, min: i64) {
        self.set_age_range(min, self.age_range.max);
    }

    /// Move the upper bound, keeping the lower one.
    pub fn set_age_max(&mut self, max: i64) {
        self.set_age_range(self.age_range.min, max);
    }

    /// Set both bounds exactly as given.
    ///
    /// Bounds outside the load-time domain are not pulled back into it, so a
    /// range past every observed age matches nothing. Crossed bounds stay
    /// crossed (an empty range) rather than being swapped. Either way
    /// [`apply`] then yields an empty table.
    pub fn set_age_range(&mut self, min: i64, max: i64) {
        self.age_range = AgeRange::new(min, max);
    }

    /// True when `record` passes both filters.
    pub fn matches(&self, record: &StudentRecord) -> bool {
        self.months.contains(&record.birth_month) && self.age_range.contains(record.age_surveyed)
    }
}

/// Default selection for a freshly loaded table: every month, and the age
/// range spanning the observed minimum and maximum `AgeSurveyed`.
///
/// All twelve months are selected whether or not they occur in the data.
/// An empty table gets the degenerate range `(0, 0)`.
pub fn initialize(table: &RawTable) -> FilterSelection {
    let domain = table.age_domain().unwrap_or((0, 0));
    log::info!(
        "[Census] filter: initialized over {} records, ages {}..={}",
        table.len(),
        domain.0,
        domain.1
    );
    FilterSelection::with_domain(domain)
}

/// Restrict `table` to the records matching `selection`, keeping load order.
///
/// Total: an empty month set or a crossed age range yields an empty table.
pub fn apply<'a>(table: &'a RawTable, selection: &FilterSelection) -> FilteredTable<'a> {
    if selection.months.is_empty() || selection.age_range.is_empty() {
        return FilteredTable::default();
    }
    let rows: Vec<&StudentRecord> = table.iter().filter(|r| selection.matches(r)).collect();
    log::debug!(
        "[Census] filter: {} of {} records match",
        rows.len(),
        table.len()
    );
    FilteredTable { rows }
}

/// The records of a [`RawTable`] that pass the current filter.
///
/// Holds references into the raw table, so every row is one of the loaded
/// records by identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredTable<'a> {
    rows: Vec<&'a StudentRecord>,
}

impl<'a> FilteredTable<'a> {
    /// Every record of `table`, unfiltered.
    pub fn all(table: &'a RawTable) -> Self {
        Self {
            rows: table.iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a StudentRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StudentRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> From<Vec<&'a StudentRecord>> for FilteredTable<'a> {
    fn from(rows: Vec<&'a StudentRecord>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_model::Gender;

    fn record(id: i64, month: BirthMonth, age: i64) -> StudentRecord {
        StudentRecord::demographic(id, Some(Gender::new("Female")), age, 2020, month)
    }

    /// 100 records, ages 10..=18, every month represented.
    fn hundred() -> RawTable {
        RawTable::new(
            (0..100)
                .map(|i| record(i, BirthMonth::ALL[(i % 12) as usize], 10 + (i * 7) % 9))
                .collect(),
        )
    }

    #[test]
    fn initialize_selects_all_months_and_full_age_range() {
        let table = hundred();
        let selection = initialize(&table);
        assert_eq!(selection.months.len(), 12);
        assert_eq!(selection.age_range, AgeRange::new(10, 18));
        assert_eq!(selection.age_domain(), (10, 18));
    }

    #[test]
    fn initialize_selects_months_absent_from_data() {
        let table = RawTable::new(vec![record(1, BirthMonth::March, 12)]);
        let selection = initialize(&table);
        assert!(selection.is_month_selected(BirthMonth::December));
        assert_eq!(selection.age_range, AgeRange::new(12, 12));
    }

    #[test]
    fn initialize_empty_table() {
        let selection = initialize(&RawTable::default());
        assert_eq!(selection.age_range, AgeRange::new(0, 0));
        assert!(apply(&RawTable::default(), &selection).is_empty());
    }

    #[test]
    fn defaults_return_whole_table_in_order() {
        let table = hundred();
        let filtered = apply(&table, &initialize(&table));
        assert_eq!(filtered.len(), table.len());
        for (kept, original) in filtered.iter().zip(table.iter()) {
            assert!(std::ptr::eq(kept, original));
        }
    }

    #[test]
    fn months_and_age_range_both_apply() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.set_months([BirthMonth::January, BirthMonth::February]);
        selection.set_age_range(12, 15);

        let expected: Vec<i64> = table
            .iter()
            .filter(|r| {
                matches!(r.birth_month, BirthMonth::January | BirthMonth::February)
                    && (12..=15).contains(&r.age_surveyed)
            })
            .map(|r| r.student_id)
            .collect();
        let filtered = apply(&table, &selection);
        let ids: Vec<i64> = filtered.iter().map(|r| r.student_id).collect();
        assert!(!expected.is_empty());
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_month_set_yields_empty_table() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.clear_months();
        assert!(apply(&table, &selection).is_empty());
    }

    #[test]
    fn crossed_age_range_yields_empty_table() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.age_range = AgeRange::new(15, 12);
        assert!(apply(&table, &selection).is_empty());
    }

    #[test]
    fn age_range_outside_data_yields_empty_table() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.age_range = AgeRange::new(19, 20);
        assert!(apply(&table, &selection).is_empty());
    }

    #[test]
    fn setters_keep_requested_bounds() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.set_age_min(3);
        assert_eq!(selection.age_range, AgeRange::new(3, 18));
        selection.set_age_max(40);
        assert_eq!(selection.age_range, AgeRange::new(3, 40));
        assert_eq!(apply(&table, &selection).len(), table.len());
        selection.set_age_range(16, 12);
        assert!(selection.age_range.is_empty());
        assert!(apply(&table, &selection).is_empty());
        assert_eq!(selection.age_domain(), (10, 18));
    }

    #[test]
    fn ranges_outside_the_domain_match_nothing() {
        let table = hundred();
        let mut selection = initialize(&table);
        selection.set_age_range(19, 20);
        assert_eq!(selection.age_range, AgeRange::new(19, 20));
        assert!(apply(&table, &selection).is_empty());
        selection.set_age_range(3, 9);
        assert_eq!(selection.age_range, AgeRange::new(3, 9));
        assert!(apply(&table, &selection).is_empty());
    }

    #[test]
    fn toggle_month_flips_membership() {
        let mut selection = FilterSelection::with_domain((10, 18));
        selection.toggle_month(BirthMonth::June);
        assert!(!selection.is_month_selected(BirthMonth::June));
        selection.toggle_month(BirthMonth::June);
        assert!(selection.is_month_selected(BirthMonth::June));
    }

    #[test]
    fn select_all_restores_every_month() {
        let mut selection = FilterSelection::with_domain((10, 18));
        selection.clear_months();
        selection.select_all_months();
        assert_eq!(selection.months.len(), 12);
    }

    #[test]
    fn filter_ignores_other_fields() {
        let mut a = record(1, BirthMonth::May, 14);
        a.height = None;
        a.gender = None;
        let table = RawTable::new(vec![a]);
        assert_eq!(apply(&table, &initialize(&table)).len(), 1);
    }
}
