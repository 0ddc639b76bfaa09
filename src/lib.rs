//! Interactive explorer for industrial decarbonisation scenarios.
//!
//! Loads a precomputed table of simulated furnace-technology outcomes once
//! at startup, then lets the user filter by technology and input-cost
//! ranges and inspect the trade-offs through a parallel-coordinates plot
//! and per-technology summaries.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod descriptions;
pub mod state;
pub mod ui;
