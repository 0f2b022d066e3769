use eframe::egui;

use crate::state::AppState;
use crate::ui::page;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiagnosisDashboardApp {
    pub state: AppState,
}

impl DiagnosisDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DiagnosisDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            page::dashboard_page(ui, &mut self.state);
        });
    }
}
