use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::DisasterDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Header – title and narrative opening
// ---------------------------------------------------------------------------

/// Render the page title, intro paragraph and a short status line.
pub fn header(ui: &mut Ui, dataset: &DisasterDataset, state: &AppState) {
    ui.heading(RichText::new("🌍 Immersive Visual Data Stories").size(28.0));
    ui.label(RichText::new("Global Disaster Response Analysis (2018–2024)").size(18.0));
    ui.add_space(6.0);
    ui.label(
        "These charts are laid out as a connected visual story about how the world \
         responds to disasters. Each section tells one part of it, from what happens \
         most often to how long recovery takes.",
    );
    ui.add_space(4.0);
    ui.weak(format!(
        "{} of {} events match the current filters",
        state.view.len(),
        dataset.len()
    ));
    ui.separator();
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, dataset: &DisasterDataset, state: &mut AppState) {
    ui.heading("🔎 Story Filters");
    ui.separator();

    let Some((first_year, last_year)) = dataset.year_bounds() else {
        ui.label("No events loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Year range");
            let mut year_min = state.selection.year_min;
            if ui
                .add(egui::Slider::new(&mut year_min, first_year..=last_year).text("from"))
                .changed()
            {
                state.set_year_min(dataset, year_min);
            }
            let mut year_max = state.selection.year_max;
            if ui
                .add(egui::Slider::new(&mut year_max, first_year..=last_year).text("to"))
                .changed()
            {
                state.set_year_max(dataset, year_max);
            }
            ui.separator();

            // ---- Disaster types ----
            let n_selected = state.selection.selected_types.len();
            let n_total = dataset.disaster_types().len();
            ui.strong(format!("Disaster types  ({n_selected}/{n_total})"));

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_types(dataset);
                }
                if ui.small_button("None").clicked() {
                    state.select_no_types(dataset);
                }
            });

            for disaster_type in dataset.disaster_types() {
                let mut checked = state.is_selected(disaster_type);
                let text = RichText::new(disaster_type)
                    .color(state.type_colors.color_for(disaster_type));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_type(dataset, disaster_type);
                }
            }
        });
}
