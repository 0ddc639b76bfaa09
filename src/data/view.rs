use std::collections::BTreeMap;

use super::filter::{filtered_indices, FilterQuery};
use super::model::{sorted_distinct, CostField, Dataset, LabelMaps};

// Fixed application-level axis domains (dimension ranges that are not
// dataset-derived).
const TECHNOLOGY_AXIS: (f64, f64) = (1.0, 5.0);
const FUEL_DEMAND_AXIS: (f64, f64) = (0.0, 7.0);
const ELEC_DEMAND_AXIS: (f64, f64) = (0.0, 5.0);
const CAPTURE_AXIS: (f64, f64) = (1.0, 4.0);
const TRL_AXIS: (f64, f64) = (1.0, 4.0);
const EI_AXIS: (f64, f64) = (0.1, 0.7);

// ---------------------------------------------------------------------------
// FilteredView – everything derived from one filter interaction
// ---------------------------------------------------------------------------

/// Per-technology occurrence count and distinct cost values observed in the
/// filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnologySummary {
    /// Display name from the label map.
    pub name: String,
    /// Occurrence count within the filtered subset.
    pub count: usize,
    /// Sorted distinct values per cost field within the filtered subset.
    pub cost_values: BTreeMap<CostField, Vec<f64>>,
}

/// One parallel-coordinates axis: domain, ticks, optional tick label
/// overrides, and the filtered per-row values to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    /// Axis domain, fixed or dataset-derived (never filter-derived).
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    /// Tick label text overrides for categorical axes, parallel to `ticks`.
    pub tick_labels: Option<Vec<String>>,
    /// One value per filtered row, in filtered order. Unknown ordinals
    /// (unmapped TRL text) are NaN.
    pub values: Vec<f64>,
}

/// The transient result of applying the current filter to the dataset.
/// Recomputed in full on every interaction; never mutates the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    /// Indices of matching records, in original dataset order.
    pub indices: Vec<usize>,
    /// Total number of matching records.
    pub total_count: usize,
    /// Summary per technology present in the subset. Technologies with
    /// zero occurrences have no entry.
    pub summaries: BTreeMap<u8, TechnologySummary>,
    /// One axis descriptor per tracked field, in display order.
    pub axes: Vec<AxisSpec>,
    /// Technology code of each filtered row, for the colour encoding.
    pub color_keys: Vec<u8>,
}

// ---------------------------------------------------------------------------
// compute_view – the one public engine operation
// ---------------------------------------------------------------------------

/// Apply the query to the dataset and derive the summary and the chart
/// dimension specification.
///
/// Pure and deterministic; performs no I/O and cannot fail under
/// well-formed inputs. An empty result is a valid view (zero count, empty
/// summary map), not an error.
pub fn compute_view(dataset: &Dataset, labels: &LabelMaps, query: &FilterQuery) -> FilteredView {
    let indices = filtered_indices(dataset, query);
    let total_count = indices.len();

    let summaries = summarize(dataset, labels, &indices);
    let axes = axis_specs(dataset, labels, &indices);
    let color_keys = indices
        .iter()
        .map(|&i| dataset.records[i].technology)
        .collect();

    FilteredView {
        indices,
        total_count,
        summaries,
        axes,
        color_keys,
    }
}

/// Partition the filtered rows by technology and compute per-technology
/// counts and distinct cost-value sets.
fn summarize(
    dataset: &Dataset,
    labels: &LabelMaps,
    indices: &[usize],
) -> BTreeMap<u8, TechnologySummary> {
    let mut by_technology: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        by_technology
            .entry(dataset.records[i].technology)
            .or_default()
            .push(i);
    }

    by_technology
        .into_iter()
        .map(|(code, rows)| {
            let cost_values = CostField::ALL
                .into_iter()
                .map(|field| {
                    let distinct =
                        sorted_distinct(rows.iter().map(|&i| dataset.records[i].cost(field)));
                    (field, distinct)
                })
                .collect();
            let summary = TechnologySummary {
                name: labels.technology_name(code),
                count: rows.len(),
                cost_values,
            };
            (code, summary)
        })
        .collect()
}

/// Build the axis descriptors in display order. Domains and ticks come from
/// the full dataset or fixed application-level bounds, never from the
/// filtered subset, so axes stay stable while the user filters.
fn axis_specs(dataset: &Dataset, labels: &LabelMaps, indices: &[usize]) -> Vec<AxisSpec> {
    let mut axes = Vec::with_capacity(CostField::ALL.len() + 7);

    for field in CostField::ALL {
        let (min, max) = dataset.cost_bounds[&field];
        axes.push(AxisSpec {
            label: field.label().to_string(),
            min,
            max,
            ticks: dataset.cost_values[&field].clone(),
            tick_labels: None,
            values: collect(dataset, indices, |r| r.cost(field)),
        });
    }

    let technology_ticks: Vec<f64> = (1..=5).map(f64::from).collect();
    axes.push(AxisSpec {
        label: "Technology".to_string(),
        min: TECHNOLOGY_AXIS.0,
        max: TECHNOLOGY_AXIS.1,
        tick_labels: Some(
            (1..=5u8)
                .map(|code| labels.technology_name(code))
                .collect(),
        ),
        ticks: technology_ticks,
        values: collect(dataset, indices, |r| f64::from(r.technology)),
    });

    axes.push(AxisSpec {
        label: "Fuel Demand (GJ/t glass)".to_string(),
        min: FUEL_DEMAND_AXIS.0,
        max: FUEL_DEMAND_AXIS.1,
        ticks: (0..=7).map(f64::from).collect(),
        tick_labels: None,
        values: collect(dataset, indices, |r| r.fuel_demand),
    });

    axes.push(AxisSpec {
        label: "Electricity Demand (GJ/t glass)".to_string(),
        min: ELEC_DEMAND_AXIS.0,
        max: ELEC_DEMAND_AXIS.1,
        ticks: (0..=5).map(f64::from).collect(),
        tick_labels: None,
        values: collect(dataset, indices, |r| r.elec_demand),
    });

    axes.push(AxisSpec {
        label: "Carbon Capture".to_string(),
        min: CAPTURE_AXIS.0,
        max: CAPTURE_AXIS.1,
        tick_labels: Some((1..=4u8).map(|code| labels.capture_label(code)).collect()),
        ticks: (1..=4).map(f64::from).collect(),
        values: collect(dataset, indices, |r| f64::from(r.co2_capt)),
    });

    axes.push(AxisSpec {
        label: "TRL".to_string(),
        min: TRL_AXIS.0,
        max: TRL_AXIS.1,
        tick_labels: Some(labels.trl_band_labels()),
        ticks: (1..=4).map(f64::from).collect(),
        values: collect(dataset, indices, |r| {
            r.trl_num.map(f64::from).unwrap_or(f64::NAN)
        }),
    });

    axes.push(AxisSpec {
        label: "Electricity Produced (MWe)".to_string(),
        min: dataset.elec_prod_bounds.0,
        max: dataset.elec_prod_bounds.1,
        ticks: dataset.elec_prod_values.clone(),
        tick_labels: None,
        values: collect(dataset, indices, |r| r.elec_prod),
    });

    axes.push(AxisSpec {
        label: "Emissions (tCO2/t glass)".to_string(),
        min: EI_AXIS.0,
        max: EI_AXIS.1,
        ticks: (1..=7).map(|i| f64::from(i) / 10.0).collect(),
        tick_labels: None,
        values: collect(dataset, indices, |r| r.ei),
    });

    axes
}

fn collect(
    dataset: &Dataset,
    indices: &[usize],
    f: impl Fn(&super::model::Record) -> f64,
) -> Vec<f64> {
    indices.iter().map(|&i| f(&dataset.records[i])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::CostRange;
    use crate::data::model::Record;

    fn record(technology: u8, c_ee: f64, c_h2: f64, c_ng: f64, c_co2: f64) -> Record {
        Record {
            technology,
            c_ee,
            c_h2,
            c_ng,
            c_co2,
            fuel_demand: 2.0,
            elec_demand: 1.0,
            co2_capt: 2,
            ei: 0.3,
            trl: "High: 8".to_string(),
            trl_num: Some(3),
            elec_prod: 0.15,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1, 10.0, 20.0, 5.0, 50.0),
            record(1, 50.0, 20.0, 5.0, 50.0),
            record(2, 10.0, 20.0, 5.0, 50.0),
        ])
    }

    fn full_ranges() -> BTreeMap<CostField, CostRange> {
        CostField::ALL
            .into_iter()
            .map(|f| (f, CostRange::full()))
            .collect()
    }

    #[test]
    fn narrow_filter_yields_single_row_summary_and_omits_absent_technology() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let mut ranges = full_ranges();
        ranges.insert(CostField::Electricity, CostRange::new(0.0, 20.0));
        let query = FilterQuery::new([1], ranges);

        let view = compute_view(&ds, &labels, &query);
        assert_eq!(view.indices, vec![0]);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.summaries.len(), 1);

        let tech1 = &view.summaries[&1];
        assert_eq!(tech1.name, "NG-fired");
        assert_eq!(tech1.count, 1);
        assert_eq!(tech1.cost_values[&CostField::Electricity], vec![10.0]);
        assert!(!view.summaries.contains_key(&2));
    }

    #[test]
    fn scalar_selection_not_in_dataset_yields_valid_empty_view() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let query = FilterQuery::single_technology(0, full_ranges());

        let view = compute_view(&ds, &labels, &query);
        assert!(view.indices.is_empty());
        assert_eq!(view.total_count, 0);
        assert!(view.summaries.is_empty());
        // Axes remain valid for rendering the empty state.
        assert!(view.axes.iter().all(|a| a.values.is_empty()));
    }

    #[test]
    fn summary_counts_sum_to_total() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let view = compute_view(&ds, &labels, &FilterQuery::all_of(&ds));
        let summed: usize = view.summaries.values().map(|s| s.count).sum();
        assert_eq!(summed, view.total_count);
        assert_eq!(view.total_count, 3);
    }

    #[test]
    fn repeated_calls_return_identical_views() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let query = FilterQuery::all_of(&ds);
        assert_eq!(
            compute_view(&ds, &labels, &query),
            compute_view(&ds, &labels, &query)
        );
    }

    #[test]
    fn axes_carry_fixed_and_dataset_derived_domains() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let view = compute_view(&ds, &labels, &FilterQuery::all_of(&ds));

        let cee = &view.axes[0];
        assert_eq!(cee.label, "Electricity (€/MWh)");
        assert_eq!((cee.min, cee.max), (10.0, 50.0));
        assert_eq!(cee.ticks, vec![10.0, 50.0]);
        assert_eq!(cee.values.len(), 3);

        let tech = view
            .axes
            .iter()
            .find(|a| a.label == "Technology")
            .expect("technology axis");
        assert_eq!((tech.min, tech.max), (1.0, 5.0));
        assert_eq!(
            tech.tick_labels.as_deref().unwrap()[4],
            "H2-fired".to_string()
        );

        let ei = view.axes.last().expect("EI axis");
        assert_eq!((ei.min, ei.max), (0.1, 0.7));
        assert_eq!(ei.ticks.len(), 7);
    }

    #[test]
    fn unmapped_trl_plots_as_nan_not_a_crash() {
        let mut rec = record(1, 10.0, 20.0, 5.0, 50.0);
        rec.trl = "Prototype".to_string();
        rec.trl_num = None;
        let ds = Dataset::from_records(vec![rec]);
        let labels = LabelMaps::default();
        let view = compute_view(&ds, &labels, &FilterQuery::all_of(&ds));
        let trl_axis = view
            .axes
            .iter()
            .find(|a| a.label == "TRL")
            .expect("TRL axis");
        assert!(trl_axis.values[0].is_nan());
    }

    #[test]
    fn color_keys_follow_filtered_rows() {
        let ds = sample_dataset();
        let labels = LabelMaps::default();
        let view = compute_view(&ds, &labels, &FilterQuery::all_of(&ds));
        assert_eq!(view.color_keys, vec![1, 1, 2]);
    }
}
