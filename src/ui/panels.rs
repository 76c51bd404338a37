use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Dimension;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible checkbox section per
/// categorical dimension.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Here");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the option lists so we can mutate state inside the loop.
    let options: Vec<(Dimension, Vec<String>)> = Dimension::ALL
        .iter()
        .map(|&dim| (dim, dataset.distinct(dim).to_vec()))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (dim, values) in &options {
                // Show count of selected / total in the header
                let n_selected = state.selection.selected(*dim).len();
                let header_text = format!("{}  ({n_selected}/{})", dim.label(), values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.label())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(*dim);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(*dim);
                            }
                        });

                        for value in values {
                            let mut checked = state.selection.selected(*dim).contains(value);

                            // Ship-type labels carry their scatter colour.
                            let mut text = RichText::new(value);
                            if *dim == Dimension::ShipType {
                                if let Some(colors) = &state.ship_colors {
                                    text = text.color(colors.color_for(value));
                                }
                            }

                            if ui.checkbox(&mut checked, text).changed() {
                                state.toggle_value(*dim, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fuel consumption data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(&path, state);
    }
}

/// Load `path` into the app state, surfacing failures in the top bar.
pub fn load_into_state(path: &Path, state: &mut AppState) {
    let result = crate::data::loader::load_file(path)
        .with_context(|| format!("opening {}", path.display()));

    match result {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records ({} ship types, {} months of data)",
                dataset.len(),
                dataset.distinct(Dimension::ShipType).len(),
                dataset
                    .records
                    .iter()
                    .map(|r| r.month.as_str())
                    .collect::<std::collections::BTreeSet<_>>()
                    .len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
