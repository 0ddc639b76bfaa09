use eframe::egui::{self, RichText, ScrollArea, TextEdit, Ui};

use crate::data::model::CostField;
use crate::descriptions::technology_description;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title, record counts, page navigation.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Decarbonisation Analysis of Flat Glass Production");
        ui.separator();
        ui.label(format!(
            "{} scenarios loaded, {} in range",
            state.dataset.len(),
            state.view.total_count
        ));

        if state.page != Page::Main {
            ui.separator();
            if ui.link("Back to main page").clicked() {
                state.page = Page::Main;
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – technology toggles and cost-range inputs
// ---------------------------------------------------------------------------

/// Render the filter controls. Every change rebuilds the query and
/// recomputes the view synchronously.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Technologies");
            let technologies = state.dataset.technologies.clone();
            for code in technologies {
                let name = state.labels.technology_name(code);
                let color = state.colors.color_for(code);
                let mut checked = state.selected.contains(&code);

                ui.horizontal(|ui: &mut Ui| {
                    if ui
                        .checkbox(&mut checked, RichText::new(&name).color(color))
                        .changed()
                    {
                        state.toggle_technology(code);
                    }
                    if technology_description(code).is_some() && ui.small_button("ℹ").clicked()
                    {
                        state.page = Page::Technology(code);
                    }
                });
            }

            ui.separator();
            ui.strong("Cost ranges");
            for field in CostField::ALL {
                ui.add_space(4.0);
                ui.label(field.label());
                let (min_text, max_text) = state
                    .range_inputs
                    .entry(field)
                    .or_insert_with(|| (String::new(), String::new()));

                let mut changed = false;
                ui.horizontal(|ui: &mut Ui| {
                    changed |= ui
                        .add(TextEdit::singleline(min_text).desired_width(70.0))
                        .changed();
                    ui.label("to");
                    changed |= ui
                        .add(TextEdit::singleline(max_text).desired_width(70.0))
                        .changed();
                });
                if changed {
                    state.apply_range_input(field);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom details panel – per-technology occurrence summaries
// ---------------------------------------------------------------------------

/// Render the summary cards, or the neutral "no data" message when the
/// filtered subset is empty.
pub fn details_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Details");

    if state.view.total_count == 0 {
        ui.label("No data available for the selected range.");
        return;
    }

    ui.label(format!(
        "Total number of solutions in the selected range: {}",
        state.view.total_count
    ));
    ui.add_space(4.0);

    ScrollArea::horizontal()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for (code, summary) in &state.view.summaries {
                    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                        ui.vertical(|ui: &mut Ui| {
                            ui.strong(
                                RichText::new(format!("Technology: {}", summary.name))
                                    .color(state.colors.color_for(*code)),
                            );
                            ui.label(format!("Number of occurrences: {}", summary.count));
                            for field in CostField::ALL {
                                ui.label(format!(
                                    "{}: {}",
                                    field.key(),
                                    format_values(&summary.cost_values[&field])
                                ));
                            }
                        });
                    });
                }
            });
        });
}

fn format_values(values: &[f64]) -> String {
    let joined: Vec<String> = values.iter().map(|v| format!("{v}")).collect();
    format!("[{}]", joined.join(", "))
}

// ---------------------------------------------------------------------------
// Technology detail page
// ---------------------------------------------------------------------------

/// Render the static title/description page for one technology.
pub fn technology_page(ui: &mut Ui, code: u8) {
    match technology_description(code) {
        Some((title, description)) => {
            ui.heading(title);
            ui.add_space(8.0);
            ui.label(description);
        }
        None => {
            ui.heading("Unknown technology");
        }
    }
}
