use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

use crate::data::view::AxisSpec;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Parallel-coordinates plot (central panel)
// ---------------------------------------------------------------------------

// Vertical space reserved above the axes for their labels.
const LABEL_Y: f64 = 1.08;

/// Render the parallel-coordinates plot: one vertical axis per tracked
/// field, each filtered record drawn as a polyline across all axes,
/// coloured by technology.
pub fn parallel_coordinates(ui: &mut Ui, state: &AppState) {
    let view = &state.view;
    let n_axes = view.axes.len();

    Plot::new("parallel_coordinates")
        .show_axes([false, false])
        .show_grid([false, false])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_x(-0.6)
        .include_x(n_axes as f64 - 0.4)
        .include_y(-0.08)
        .include_y(LABEL_Y + 0.08)
        .show(ui, |plot_ui| {
            // Record polylines first so the axes draw on top of them.
            for (row, &code) in view.color_keys.iter().enumerate() {
                let color = state.colors.color_for(code);
                let points: PlotPoints = view
                    .axes
                    .iter()
                    .enumerate()
                    .map(|(i, axis)| [i as f64, normalized(axis, axis.values[row])])
                    .collect();
                plot_ui.line(Line::new(points).color(color).width(1.0));
            }

            for (i, axis) in view.axes.iter().enumerate() {
                let x = i as f64;
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[x, 0.0], [x, 1.0]]))
                        .color(Color32::DARK_GRAY)
                        .width(2.0),
                );

                for (j, &tick) in axis.ticks.iter().enumerate() {
                    let y = normalized(axis, tick);
                    let label = axis
                        .tick_labels
                        .as_ref()
                        .and_then(|labels| labels.get(j))
                        .cloned()
                        .unwrap_or_else(|| format!("{tick}"));
                    plot_ui.text(
                        Text::new(PlotPoint::new(x + 0.05, y), RichText::new(label).small())
                            .anchor(Align2::LEFT_CENTER)
                            .color(Color32::GRAY),
                    );
                }

                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x, LABEL_Y),
                        RichText::new(&axis.label).strong(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// Map a field value onto the axis's unit interval. Unknown values (an
/// unmapped TRL ordinal) sit at the axis floor; a degenerate domain maps
/// to the midpoint.
fn normalized(axis: &AxisSpec, value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let span = axis.max - axis.min;
    if span.abs() < f64::EPSILON {
        return 0.5;
    }
    ((value - axis.min) / span).clamp(0.0, 1.0)
}
