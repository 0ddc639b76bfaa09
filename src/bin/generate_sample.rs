//! Generate a deterministic sample scenario dataset.
//!
//! For every combination of sampled input costs, picks the
//! cheapest-to-operate furnace technology and writes one row for it, so the
//! output has the same shape as the real simulation results: one chosen
//! technology per cost scenario.

use std::path::Path;

use anyhow::{Context, Result};

// Per-technology constants: (code, fuel GJ/t, elec GJ/t, EI tCO2/t,
// elec_prod MWe, TRL band).
const TECHNOLOGIES: [(u8, f64, f64, f64, f64, &str); 5] = [
    (1, 5.34, 0.80, 0.22, 0.22, "High: 9"),
    (2, 4.23, 1.09, 0.14, 0.23, "High: 8"),
    (3, 1.92, 2.16, 0.14, 0.15, "Medium: 6 - 7"),
    (4, 0.00, 4.19, 0.18, 0.00, "Medium: 6 - 7"),
    (5, 5.59, 0.80, 0.15, 0.23, "Low: 3 - 4"),
];

// Sampled cost grids (€/MWh, €/tCO2).
const C_EE: [f64; 9] = [10.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0];
const C_H2: [f64; 7] = [10.0, 25.0, 50.0, 75.0, 100.0, 150.0, 200.0];
const C_NG: [f64; 5] = [10.0, 35.0, 55.0, 75.0, 100.0];
const C_CO2: [f64; 5] = [75.0, 100.0, 150.0, 200.0, 250.0];

const GJ_PER_MWH: f64 = 3.6;

/// Operating cost per tonne of glass for one technology under one cost
/// scenario. Hydrogen firing buys H2, the NG-based furnaces buy NG, the
/// all-electric furnace buys no fuel at all.
fn operating_cost(code: u8, fuel: f64, elec: f64, ei: f64, c: &CostPoint) -> f64 {
    let fuel_price = match code {
        5 => c.c_h2,
        4 => 0.0,
        _ => c.c_ng,
    };
    fuel * fuel_price / GJ_PER_MWH + elec * c.c_ee / GJ_PER_MWH + ei * c.c_co2
}

struct CostPoint {
    c_ee: f64,
    c_h2: f64,
    c_ng: f64,
    c_co2: f64,
}

fn main() -> Result<()> {
    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/scenarios.csv".to_string());
    if let Some(dir) = Path::new(&out_path).parent() {
        std::fs::create_dir_all(dir).context("creating output directory")?;
    }

    let mut writer = csv::Writer::from_path(&out_path).context("opening output file")?;
    writer.write_record([
        "Technology",
        "cEE",
        "cH2",
        "cNG",
        "cCO2",
        "fuel_demand",
        "elec_demand",
        "co2_capt",
        "EI",
        "TRL",
        "elec_prod",
    ])?;

    let mut rows = 0usize;
    for &c_ee in &C_EE {
        for &c_h2 in &C_H2 {
            for &c_ng in &C_NG {
                for &c_co2 in &C_CO2 {
                    let point = CostPoint {
                        c_ee,
                        c_h2,
                        c_ng,
                        c_co2,
                    };
                    let (code, fuel, elec, ei, prod, trl) = TECHNOLOGIES
                        .into_iter()
                        .min_by(|a, b| {
                            let cost_a = operating_cost(a.0, a.1, a.2, a.3, &point);
                            let cost_b = operating_cost(b.0, b.1, b.2, b.3, &point);
                            cost_a.total_cmp(&cost_b)
                        })
                        .expect("technology table is non-empty");

                    writer.write_record([
                        code.to_string(),
                        c_ee.to_string(),
                        c_h2.to_string(),
                        c_ng.to_string(),
                        c_co2.to_string(),
                        fuel.to_string(),
                        elec.to_string(),
                        "2".to_string(),
                        ei.to_string(),
                        trl.to_string(),
                        prod.to_string(),
                    ])?;
                    rows += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("wrote {rows} scenario rows to {out_path}");
    Ok(())
}
