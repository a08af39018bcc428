use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::{LINE_COLOR, gap_segments};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Index chart (central panel)
// ---------------------------------------------------------------------------

/// Render the active chart in the central panel.
pub fn index_chart(ui: &mut Ui, state: &AppState) {
    if state.loading {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.horizontal_centered(|ui: &mut Ui| {
                ui.spinner();
                ui.heading("Loading index data…");
            });
        });
        return;
    }

    let chart = match state.chart.active() {
        Some(chart) => chart,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Select an index to view its closing values");
            });
            return;
        }
    };

    // Tick labels are row dates; the formatter must own them.
    let axis = chart.clone();

    Plot::new(("index_chart", state.chart.generation()))
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("Index Closing Value (₹)")
        .x_axis_formatter(move |mark, _range| {
            axis.label_at(mark.value).unwrap_or_default().to_string()
        })
        .label_formatter(|name, point| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{:.2}", point.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Each finite run is its own line; shared name keeps one legend entry.
            for segment in gap_segments(&chart.values) {
                let points = PlotPoints::new(segment);
                let line = Line::new(points)
                    .name(&chart.title)
                    .color(LINE_COLOR)
                    .width(2.0);
                plot_ui.line(line);
            }
        });
}
