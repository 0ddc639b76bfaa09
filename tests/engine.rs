//! End-to-end contract of the load → filter → summarize pipeline.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use decarb_explorer::data::filter::{CostRange, FilterQuery};
use decarb_explorer::data::loader;
use decarb_explorer::data::model::{CostField, Dataset, LabelMaps};
use decarb_explorer::data::view::compute_view;

const HEADER: &str =
    "Technology,cEE,cH2,cNG,cCO2,fuel_demand,elec_demand,co2_capt,EI,TRL,elec_prod";

fn write_temp_csv(name: &str, rows: &[&str]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "decarb-explorer-engine-{}-{name}.csv",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    path
}

fn load(name: &str, rows: &[&str]) -> Dataset {
    let path = write_temp_csv(name, rows);
    let dataset = loader::load_file(&path, &LabelMaps::default()).unwrap();
    std::fs::remove_file(&path).ok();
    dataset
}

fn full_ranges() -> BTreeMap<CostField, CostRange> {
    CostField::ALL
        .into_iter()
        .map(|f| (f, CostRange::full()))
        .collect()
}

#[test]
fn full_range_full_selection_round_trips_the_dataset_in_order() {
    let dataset = load(
        "roundtrip",
        &[
            "1,10,20,5,50,5.34,0.8,2,0.22,High: 9,0.22",
            "2,50,20,5,50,4.23,1.09,2,0.14,High: 8,0.23",
            "5,10,20,5,50,5.59,0.8,2,0.15,Low: 3 - 4,0.23",
        ],
    );
    let labels = LabelMaps::default();
    let view = compute_view(&dataset, &labels, &FilterQuery::all_of(&dataset));

    assert_eq!(view.indices, vec![0, 1, 2]);
    assert_eq!(view.total_count, dataset.len());
    let summed: usize = view.summaries.values().map(|s| s.count).sum();
    assert_eq!(summed, view.total_count);
}

#[test]
fn spec_scenario_single_match_with_summary() {
    let dataset = load(
        "scenario",
        &[
            "1,10,20,5,50,5.34,0.8,2,0.22,High: 9,0.22",
            "1,50,20,5,50,5.34,0.8,2,0.22,High: 9,0.22",
            "2,10,20,5,50,4.23,1.09,2,0.14,High: 8,0.23",
        ],
    );
    let labels = LabelMaps::default();

    let mut ranges = full_ranges();
    ranges.insert(CostField::Electricity, CostRange::new(0.0, 20.0));
    let view = compute_view(&dataset, &labels, &FilterQuery::new([1], ranges));

    assert_eq!(view.indices, vec![0]);
    assert_eq!(view.total_count, 1);
    assert_eq!(view.summaries.len(), 1);
    assert_eq!(view.summaries[&1].count, 1);
    assert_eq!(view.summaries[&1].cost_values[&CostField::Electricity], vec![10.0]);
    assert!(!view.summaries.contains_key(&2));
}

#[test]
fn boundary_values_are_included() {
    let dataset = load(
        "boundary",
        &["1,10,20,5,50,5.34,0.8,2,0.22,High: 9,0.22"],
    );
    let labels = LabelMaps::default();

    let mut ranges = full_ranges();
    // both bounds exactly on the record's value
    ranges.insert(CostField::Electricity, CostRange::new(10.0, 10.0));
    let view = compute_view(&dataset, &labels, &FilterQuery::new([1], ranges));
    assert_eq!(view.total_count, 1);
}

#[test]
fn narrowing_is_monotonic_across_every_cost_field() {
    let dataset = load(
        "monotonic",
        &[
            "1,10,10,10,75,5.34,0.8,2,0.22,High: 9,0.22",
            "1,50,25,35,100,5.34,0.8,2,0.22,High: 9,0.22",
            "2,100,50,55,150,4.23,1.09,2,0.14,High: 8,0.23",
            "3,150,100,75,200,1.92,2.16,2,0.14,Medium: 6 - 7,0.15",
            "5,200,200,100,250,5.59,0.8,2,0.15,Low: 3 - 4,0.23",
        ],
    );
    let labels = LabelMaps::default();
    let all = FilterQuery::all_of(&dataset);
    let full_count = compute_view(&dataset, &labels, &all).total_count;
    assert_eq!(full_count, dataset.len());

    for field in CostField::ALL {
        let mut narrowed = all.clone();
        let (min, max) = dataset.cost_bounds[&field];
        narrowed
            .ranges
            .insert(field, CostRange::new(min, (min + max) / 2.0));
        let count = compute_view(&dataset, &labels, &narrowed).total_count;
        assert!(count <= full_count, "narrowing {field} grew the result");
    }
}

#[test]
fn empty_result_is_a_valid_view() {
    let dataset = load(
        "empty",
        &["1,10,20,5,50,5.34,0.8,2,0.22,High: 9,0.22"],
    );
    let labels = LabelMaps::default();

    // scalar selection of a technology absent from the dataset
    let view = compute_view(
        &dataset,
        &labels,
        &FilterQuery::single_technology(0, full_ranges()),
    );
    assert_eq!(view.total_count, 0);
    assert!(view.indices.is_empty());
    assert!(view.summaries.is_empty());
    assert_eq!(view.axes.len(), 11);
    assert!(view.axes.iter().all(|a| a.values.is_empty()));
}
