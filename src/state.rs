use std::collections::{BTreeMap, BTreeSet};

use crate::color::TechnologyColors;
use crate::data::filter::{CostRange, FilterQuery};
use crate::data::model::{CostField, Dataset, LabelMaps};
use crate::data::view::{compute_view, FilteredView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page is showing: the dashboard or a technology detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Technology(u8),
}

/// The full UI state, independent of rendering. The dataset is read-only
/// after load; every interaction rebuilds the query and recomputes the view.
pub struct AppState {
    /// The loaded dataset (immutable for the session).
    pub dataset: Dataset,

    /// Static label maps, built once at startup.
    pub labels: LabelMaps,

    /// Technology → line colour mapping.
    pub colors: TechnologyColors,

    /// Currently selected technology codes.
    pub selected: BTreeSet<u8>,

    /// Raw text buffers for the eight range-bound inputs. Non-numeric text
    /// stays here and never reaches the engine.
    pub range_inputs: BTreeMap<CostField, (String, String)>,

    /// Last valid parse of each range.
    pub ranges: BTreeMap<CostField, CostRange>,

    /// Result of the current filter (recomputed on every change).
    pub view: FilteredView,

    /// Active page.
    pub page: Page,
}

impl AppState {
    /// Initialise with everything selected and every range at the dataset's
    /// own bounds, matching the whole table.
    pub fn new(dataset: Dataset, labels: LabelMaps) -> Self {
        let colors = TechnologyColors::new(dataset.technologies.iter().copied());
        let query = FilterQuery::all_of(&dataset);
        let range_inputs = query
            .ranges
            .iter()
            .map(|(field, range)| (*field, (format_bound(range.min), format_bound(range.max))))
            .collect();
        let view = compute_view(&dataset, &labels, &query);

        AppState {
            dataset,
            labels,
            colors,
            selected: query.technologies,
            range_inputs,
            ranges: query.ranges,
            view,
            page: Page::Main,
        }
    }

    /// Rebuild the query from current inputs and recompute the view.
    pub fn recompute(&mut self) {
        let query = FilterQuery::new(self.selected.iter().copied(), self.ranges.clone());
        self.view = compute_view(&self.dataset, &self.labels, &query);
    }

    /// Toggle one technology in the selection.
    pub fn toggle_technology(&mut self, code: u8) {
        if !self.selected.remove(&code) {
            self.selected.insert(code);
        }
        self.recompute();
    }

    /// Re-parse the text buffers of one range. Bounds that fail to parse
    /// are rejected here and the last valid value stays in force.
    pub fn apply_range_input(&mut self, field: CostField) {
        let Some((min_text, max_text)) = self.range_inputs.get(&field) else {
            return;
        };
        let range = self.ranges.entry(field).or_insert_with(CostRange::full);
        if let Ok(min) = min_text.trim().parse::<f64>() {
            range.min = min;
        }
        if let Ok(max) = max_text.trim().parse::<f64>() {
            range.max = max;
        }
        self.recompute();
    }
}

fn format_bound(value: f64) -> String {
    format!("{value}")
}
