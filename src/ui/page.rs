use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::render::render;
use crate::selection::{BinCount, Selection};
use crate::state::AppState;
use crate::ui::plot;
use crate::views::ViewError;

// ---------------------------------------------------------------------------
// The dashboard page (central panel)
// ---------------------------------------------------------------------------

/// Render the whole page top to bottom from the current widget values.
///
/// Widgets edit a copy of the selection; when it changes the copy is stored
/// and another frame is requested so the charts pick it up.
pub fn dashboard_page(ui: &mut Ui, state: &mut AppState) {
    let outputs = render(state.dataset(), &state.selection, state.preview_rows);
    let feature_names = state.dataset().feature_names().to_vec();
    let mut selection = state.selection.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Breast Cancer Diagnosis Visualization").size(28.0));
            ui.add_space(8.0);

            subheader(ui, "Sample of the Dataset");
            plot::preview_table(ui, &outputs.preview);

            subheader(ui, "Diagnosis Distribution");
            match &outputs.distribution {
                Ok(chart) => plot::bar_chart(ui, chart),
                Err(e) => view_error(ui, e),
            }
            ui.label(
                "This is a simple dashboard that visualizes the distribution of breast cancer diagnosis.",
            );

            subheader(ui, "Pair Plot of Selected Features");
            feature_multiselect(ui, &feature_names, &mut selection);
            ui.checkbox(&mut selection.show_grid, "Show Grid Lines");
            match &outputs.pair_plot {
                Ok(Some(pair)) => plot::pair_plot(ui, pair, &state.color_map),
                Ok(None) => {}
                Err(e) => view_error(ui, e),
            }

            subheader(ui, "Correlation Heatmap");
            match &outputs.heatmap {
                Ok(heatmap) => plot::heatmap(ui, heatmap),
                Err(e) => view_error(ui, e),
            }

            subheader(ui, "Box Plot of Selected Features");
            feature_selectbox(ui, &feature_names, &mut selection);
            let mut bins = selection.bins.get();
            ui.add(egui::Slider::new(&mut bins, BinCount::MIN..=BinCount::MAX).text("Number of Bins"));
            selection.set_bins(bins);
            match &outputs.histogram {
                Ok(hist) => plot::histogram(ui, hist, &state.color_map),
                Err(e) => view_error(ui, e),
            }

            subheader(ui, "Count Plot for Diagnosis");
            match &outputs.count_plot {
                Ok(counts) => plot::count_plot(ui, counts),
                Err(e) => view_error(ui, e),
            }
        });

    if selection != state.selection {
        log::debug!("Selection changed: {selection:?}");
        state.selection = selection;
        ui.ctx().request_repaint();
    }
}

fn subheader(ui: &mut Ui, text: &str) {
    ui.add_space(16.0);
    ui.label(RichText::new(text).size(20.0).strong());
    ui.separator();
}

fn view_error(ui: &mut Ui, err: &ViewError) {
    ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Multiselect over the feature columns: a collapsible list of checkboxes.
fn feature_multiselect(ui: &mut Ui, features: &[String], selection: &mut Selection) {
    let header_text = format!(
        "Select features for pair plot:  ({}/{})",
        selection.pair_features.len(),
        features.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("pair_features")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selection.pair_features = features.to_vec();
                }
                if ui.small_button("None").clicked() {
                    selection.pair_features.clear();
                }
            });

            for feature in features {
                let mut checked = selection.pair_features.contains(feature);
                if ui.checkbox(&mut checked, feature).changed() {
                    selection.toggle_pair_feature(feature);
                }
            }
        });

    if !selection.pair_features.is_empty() {
        ui.label(RichText::new(selection.pair_features.join(", ")).weak());
    }
}

/// Single choice among the feature columns.
fn feature_selectbox(ui: &mut Ui, features: &[String], selection: &mut Selection) {
    ui.label("Select a feature for the box plot:");
    egui::ComboBox::from_id_salt("histogram_feature")
        .selected_text(&selection.histogram_feature)
        .show_ui(ui, |ui: &mut Ui| {
            for feature in features {
                ui.selectable_value(&mut selection.histogram_feature, feature.clone(), feature);
            }
        });
}
