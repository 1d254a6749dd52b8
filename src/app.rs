use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::DisasterDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DisasterStoriesApp {
    /// Loaded once at startup, read-only afterwards.
    pub dataset: DisasterDataset,
    pub state: AppState,
    pub config: DashboardConfig,
}

impl DisasterStoriesApp {
    pub fn new(dataset: DisasterDataset, config: DashboardConfig) -> Self {
        let state = AppState::new(&dataset);
        Self {
            dataset,
            state,
            config,
        }
    }
}

impl eframe::App for DisasterStoriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.dataset, &mut self.state);
            });

        // ---- Central panel: header, stories, data preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui, &self.dataset, &self.state);
                    plot::stories(ui, &self.dataset, &self.state);
                    table::preview(ui, &self.dataset, &mut self.state, self.config.preview_rows);
                });
        });
    }
}
