use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CostField – the four user-filterable input-cost columns
// ---------------------------------------------------------------------------

/// One of the four cost columns a range filter can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CostField {
    Electricity,
    Hydrogen,
    NaturalGas,
    Carbon,
}

impl CostField {
    /// All cost fields in display order.
    pub const ALL: [CostField; 4] = [
        CostField::Electricity,
        CostField::Hydrogen,
        CostField::NaturalGas,
        CostField::Carbon,
    ];

    /// Column name as it appears in the dataset header.
    pub fn key(self) -> &'static str {
        match self {
            CostField::Electricity => "cEE",
            CostField::Hydrogen => "cH2",
            CostField::NaturalGas => "cNG",
            CostField::Carbon => "cCO2",
        }
    }

    /// Human-readable axis label including units.
    pub fn label(self) -> &'static str {
        match self {
            CostField::Electricity => "Electricity (€/MWh)",
            CostField::Hydrogen => "Hydrogen (€/MWh)",
            CostField::NaturalGas => "Natural Gas (€/MWh)",
            CostField::Carbon => "Emissions (€/tCO2)",
        }
    }
}

impl fmt::Display for CostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Record – one simulated scenario outcome (one row of the source table)
// ---------------------------------------------------------------------------

/// A single scenario outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Technology code, 1–5 in the source data.
    pub technology: u8,
    /// Cost of electricity (€/MWh).
    pub c_ee: f64,
    /// Cost of hydrogen (€/MWh).
    pub c_h2: f64,
    /// Cost of natural gas (€/MWh).
    pub c_ng: f64,
    /// Cost of emissions / carbon tax (€/tCO2).
    pub c_co2: f64,
    /// Fuel demand (GJ per tonne of glass).
    pub fuel_demand: f64,
    /// Electricity demand (GJ per tonne of glass).
    pub elec_demand: f64,
    /// Carbon-capture flag code (2 = yes, 3 = no).
    pub co2_capt: u8,
    /// Emissions intensity (tCO2 per tonne of glass).
    pub ei: f64,
    /// TRL band as free text, e.g. "High: 8".
    pub trl: String,
    /// TRL ordinal 1–4, `None` when the text has no mapping entry.
    pub trl_num: Option<u8>,
    /// Electricity produced / exported (MWe).
    pub elec_prod: f64,
}

impl Record {
    /// Value of the given cost field.
    pub fn cost(&self, field: CostField) -> f64 {
        match field {
            CostField::Electricity => self.c_ee,
            CostField::Hydrogen => self.c_h2,
            CostField::NaturalGas => self.c_ng,
            CostField::Carbon => self.c_co2,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table, immutable after load
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column indices.
///
/// The distinct technology codes drive the selectable option set shown to
/// the user, and the distinct values of each cost field drive that field's
/// axis tick marks.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All scenario records, in source order.
    pub records: Vec<Record>,
    /// Distinct technology codes in first-appearance order.
    pub technologies: Vec<u8>,
    /// Sorted distinct values per cost field.
    pub cost_values: BTreeMap<CostField, Vec<f64>>,
    /// Global (min, max) per cost field.
    pub cost_bounds: BTreeMap<CostField, (f64, f64)>,
    /// Sorted distinct electricity-produced values (axis ticks).
    pub elec_prod_values: Vec<f64>,
    /// Global (min, max) of electricity produced.
    pub elec_prod_bounds: (f64, f64),
}

impl Dataset {
    /// Build column indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut technologies = Vec::new();
        let mut seen = BTreeSet::new();
        for rec in &records {
            if seen.insert(rec.technology) {
                technologies.push(rec.technology);
            }
        }

        let mut cost_values = BTreeMap::new();
        let mut cost_bounds = BTreeMap::new();
        for field in CostField::ALL {
            let values = sorted_distinct(records.iter().map(|r| r.cost(field)));
            cost_bounds.insert(field, bounds_of(&values));
            cost_values.insert(field, values);
        }

        let elec_prod_values = sorted_distinct(records.iter().map(|r| r.elec_prod));
        let elec_prod_bounds = bounds_of(&elec_prod_values);

        Dataset {
            records,
            technologies,
            cost_values,
            cost_bounds,
            elec_prod_values,
            elec_prod_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sort ascending and drop exact duplicates.
pub fn sorted_distinct(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.into_iter().collect();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| a.total_cmp(b).is_eq());
    out
}

fn bounds_of(sorted: &[f64]) -> (f64, f64) {
    match (sorted.first(), sorted.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    }
}

// ---------------------------------------------------------------------------
// LabelMaps – static category-to-label mappings, built once at startup
// ---------------------------------------------------------------------------

/// Immutable label maps passed by reference into the engine. Replaces the
/// ambient global lookup tables of the source data pipeline.
#[derive(Debug, Clone)]
pub struct LabelMaps {
    technology_names: BTreeMap<u8, String>,
    trl_ordinals: BTreeMap<String, u8>,
    capture_labels: BTreeMap<u8, String>,
}

impl Default for LabelMaps {
    fn default() -> Self {
        let technology_names = [
            (1, "NG-fired"),
            (2, "NG-Oxyfuel"),
            (3, "Hybrid"),
            (4, "All-Electric"),
            (5, "H2-fired"),
        ]
        .into_iter()
        .map(|(code, name)| (code, name.to_string()))
        .collect();

        let trl_ordinals = [
            ("Low: 3 - 4", 1),
            ("Medium: 6 - 7", 2),
            ("High: 8", 3),
            ("High: 9", 4),
        ]
        .into_iter()
        .map(|(text, ord)| (text.to_string(), ord))
        .collect();

        let capture_labels = [(2, "Yes"), (3, "No")]
            .into_iter()
            .map(|(code, label)| (code, label.to_string()))
            .collect();

        LabelMaps {
            technology_names,
            trl_ordinals,
            capture_labels,
        }
    }
}

impl LabelMaps {
    /// Display name for a technology code. Codes without a mapping entry
    /// get an explicit sentinel instead of being dropped.
    pub fn technology_name(&self, code: u8) -> String {
        self.technology_names
            .get(&code)
            .cloned()
            .unwrap_or_else(|| format!("Unknown ({code})"))
    }

    /// TRL ordinal (1–4) for a band text, `None` when unmapped.
    pub fn trl_ordinal(&self, text: &str) -> Option<u8> {
        self.trl_ordinals.get(text).copied()
    }

    /// TRL band texts in ordinal order, for axis tick labels.
    pub fn trl_band_labels(&self) -> Vec<String> {
        let mut by_ordinal: Vec<(&u8, &String)> =
            self.trl_ordinals.iter().map(|(t, o)| (o, t)).collect();
        by_ordinal.sort_by_key(|(o, _)| **o);
        by_ordinal.into_iter().map(|(_, t)| t.clone()).collect()
    }

    /// Label for a carbon-capture code; unmapped codes render blank.
    pub fn capture_label(&self, code: u8) -> String {
        self.capture_labels
            .get(&code)
            .cloned()
            .unwrap_or_else(|| " ".to_string())
    }
}
