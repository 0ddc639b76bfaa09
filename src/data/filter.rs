use std::collections::{BTreeMap, BTreeSet};

use super::model::{CostField, Dataset, Record};

// ---------------------------------------------------------------------------
// Filter predicate: technology membership + four inclusive cost ranges
// ---------------------------------------------------------------------------

/// An inclusive `[min, max]` range over one cost field.
///
/// Bounds are taken as-is: an inverted range (`min > max`) matches nothing,
/// and a NaN bound matches nothing. Non-numeric user input never reaches
/// this type; it is rejected at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

impl CostRange {
    pub fn new(min: f64, max: f64) -> Self {
        CostRange { min, max }
    }

    /// The unbounded range (matches every finite value).
    pub fn full() -> Self {
        CostRange {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The conjunction of constraints rebuilt from user input on every
/// interaction. Stateless; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    /// Selected technology codes. An empty set matches nothing.
    pub technologies: BTreeSet<u8>,
    /// Inclusive range per cost field. Missing fields are unconstrained.
    pub ranges: BTreeMap<CostField, CostRange>,
}

impl FilterQuery {
    pub fn new(
        technologies: impl IntoIterator<Item = u8>,
        ranges: BTreeMap<CostField, CostRange>,
    ) -> Self {
        FilterQuery {
            technologies: technologies.into_iter().collect(),
            ranges,
        }
    }

    /// Normalize a single scalar technology input to a singleton set.
    pub fn single_technology(code: u8, ranges: BTreeMap<CostField, CostRange>) -> Self {
        Self::new([code], ranges)
    }

    /// Match-everything query for a dataset: every present technology
    /// selected, every range at the dataset's own bounds.
    pub fn all_of(dataset: &Dataset) -> Self {
        let ranges = CostField::ALL
            .into_iter()
            .map(|field| {
                let (min, max) = dataset.cost_bounds[&field];
                (field, CostRange::new(min, max))
            })
            .collect();
        Self::new(dataset.technologies.iter().copied(), ranges)
    }

    /// Whether a record passes every active constraint.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.technologies.contains(&record.technology) {
            return false;
        }
        self.ranges
            .iter()
            .all(|(field, range)| range.contains(record.cost(*field)))
    }
}

/// Indices of records passing the query, in original order.
///
/// Pure single pass over the dataset; deterministic and idempotent.
pub fn filtered_indices(dataset: &Dataset, query: &FilterQuery) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| query.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(technology: u8, c_ee: f64, c_h2: f64, c_ng: f64, c_co2: f64) -> Record {
        Record {
            technology,
            c_ee,
            c_h2,
            c_ng,
            c_co2,
            fuel_demand: 0.0,
            elec_demand: 0.0,
            co2_capt: 2,
            ei: 0.3,
            trl: "High: 8".to_string(),
            trl_num: Some(3),
            elec_prod: 0.0,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1, 10.0, 20.0, 5.0, 50.0),
            record(1, 50.0, 20.0, 5.0, 50.0),
            record(2, 10.0, 20.0, 5.0, 50.0),
        ])
    }

    fn ranges_with(field: CostField, min: f64, max: f64) -> BTreeMap<CostField, CostRange> {
        let mut ranges: BTreeMap<CostField, CostRange> = CostField::ALL
            .into_iter()
            .map(|f| (f, CostRange::full()))
            .collect();
        ranges.insert(field, CostRange::new(min, max));
        ranges
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let range = CostRange::new(10.0, 50.0);
        assert!(range.contains(10.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(9.999));
        assert!(!range.contains(50.001));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = sample_dataset();
        let query = FilterQuery::new([1, 2], ranges_with(CostField::Electricity, 50.0, 10.0));
        assert!(filtered_indices(&ds, &query).is_empty());
    }

    #[test]
    fn full_ranges_and_full_selection_return_everything_in_order() {
        let ds = sample_dataset();
        let query = FilterQuery::all_of(&ds);
        assert_eq!(filtered_indices(&ds, &query), vec![0, 1, 2]);
    }

    #[test]
    fn scalar_selection_normalizes_to_singleton() {
        let ds = sample_dataset();
        let query = FilterQuery::single_technology(
            2,
            CostField::ALL
                .into_iter()
                .map(|f| (f, CostRange::full()))
                .collect(),
        );
        assert_eq!(query.technologies.len(), 1);
        assert_eq!(filtered_indices(&ds, &query), vec![2]);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let ds = sample_dataset();
        let mut query = FilterQuery::all_of(&ds);
        query.technologies.clear();
        assert!(filtered_indices(&ds, &query).is_empty());
    }

    #[test]
    fn filtering_is_deterministic_and_idempotent() {
        let ds = sample_dataset();
        let query = FilterQuery::new([1], ranges_with(CostField::Electricity, 0.0, 20.0));
        let first = filtered_indices(&ds, &query);
        let second = filtered_indices(&ds, &query);
        assert_eq!(first, second);
        assert_eq!(first, vec![0]);
    }

    #[test]
    fn widening_a_bound_never_shrinks_the_result() {
        let ds = sample_dataset();
        let narrow = FilterQuery::new([1], ranges_with(CostField::Electricity, 0.0, 20.0));
        let wide = FilterQuery::new([1], ranges_with(CostField::Electricity, 0.0, 60.0));
        let narrow_hits = filtered_indices(&ds, &narrow);
        let wide_hits = filtered_indices(&ds, &wide);
        assert!(wide_hits.len() >= narrow_hits.len());
        assert!(narrow_hits.iter().all(|i| wide_hits.contains(i)));

        let mut with_extra_tech = narrow.clone();
        with_extra_tech.technologies.insert(2);
        assert!(filtered_indices(&ds, &with_extra_tech).len() >= narrow_hits.len());
    }
}
