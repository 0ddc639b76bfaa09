use eframe::egui;

use crate::data::model::{Dataset, LabelMaps};
use crate::state::{AppState, Page};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(dataset: Dataset, labels: LabelMaps) -> Self {
        Self {
            state: AppState::new(dataset, labels),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and navigation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        if let Page::Technology(code) = self.state.page {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::technology_page(ui, code);
            });
            return;
        }

        // ---- Left side panel: technology and cost-range filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: per-technology summary cards ----
        egui::TopBottomPanel::bottom("details_panel")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::details_panel(ui, &self.state);
            });

        // ---- Central panel: parallel-coordinates plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::parallel_coordinates(ui, &self.state);
        });
    }
}
