use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::DataSource;
use crate::state::{AppState, UiEvent};

// ---------------------------------------------------------------------------
// Left side panel – paged index list
// ---------------------------------------------------------------------------

/// Render the index list and page controls. Returns the event the user
/// triggered this frame, if any.
pub fn side_panel(ui: &mut Ui, state: &AppState) -> Option<UiEvent> {
    let mut event = None;

    ui.heading("Indexes");
    ui.separator();

    if state.loading {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Loading…");
        });
        return None;
    }

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 40.0).max(80.0))
        .show(ui, |ui: &mut Ui| {
            for name in state.visible_categories() {
                let is_selected = state.selected.as_deref() == Some(name.as_str());
                if ui.selectable_label(is_selected, name).clicked() {
                    event = Some(UiEvent::CategorySelected(name.clone()));
                }
            }
        });

    ui.separator();

    // ---- Pagination ----
    let pager = &state.paginator;
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(pager.can_go_prev(), egui::Button::new("◀ Prev"))
            .clicked()
        {
            event = Some(UiEvent::PrevRequested);
        }
        ui.label(format!(
            "Page {} of {}",
            pager.page_index() + 1,
            pager.page_count().max(1)
        ));
        if ui
            .add_enabled(pager.can_go_next(), egui::Button::new("Next ▶"))
            .clicked()
        {
            event = Some(UiEvent::NextRequested);
        }
    });

    event
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns a source to load when the user asks
/// for one.
pub fn top_bar(ui: &mut Ui, state: &AppState, csv_url: &str) -> Option<DataSource> {
    let mut request = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                request = Some(DataSource::Url(csv_url.to_string()));
                ui.close_menu();
            }
            if ui.button("Open local CSV…").clicked() {
                request = open_file_dialog();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} indexes",
                ds.len(),
                ds.categories.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    request
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn open_file_dialog() -> Option<DataSource> {
    rfd::FileDialog::new()
        .set_title("Open index data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file()
        .map(DataSource::File)
}
