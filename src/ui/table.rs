use eframe::egui::{self, CollapsingHeader, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::{DisasterDataset, DisasterEvent};
use crate::state::AppState;
use crate::stories;

// ---------------------------------------------------------------------------
// Raw-data preview
// ---------------------------------------------------------------------------

/// Collapsible table with the first rows of the filtered view, unmodified.
pub fn preview(ui: &mut Ui, dataset: &DisasterDataset, state: &mut AppState, limit: usize) {
    ui.add_space(12.0);
    let response = CollapsingHeader::new(RichText::new("📄 View data").strong())
        .id_salt("data_preview")
        .open(Some(state.show_preview))
        .show(ui, |ui: &mut Ui| {
            let rows = stories::preview(dataset, &state.view, limit);
            preview_table(ui, &stories::preview_columns(dataset), &rows);
        });

    if response.header_response.clicked() {
        state.show_preview = !state.show_preview;
    }
}

fn preview_table(ui: &mut Ui, headers: &[&str], rows: &[&DisasterEvent]) {
    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), headers.len())
            .header(20.0, |mut header| {
                for name in headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|mut body| {
                for ev in rows {
                    body.row(18.0, |mut row| {
                        for cell in stories::preview_cells(ev) {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}
