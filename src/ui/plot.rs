use std::f32::consts::FRAC_PI_2;

use eframe::egui::{
    self, Align2, FontId, Rect, RichText, Sense, Stroke, Ui, epaint::TextShape, pos2, vec2,
};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::charts::{self, CountPlot, Heatmap, Histogram, PairCell, PairPlot};
use crate::color::{self, ColorMap, generate_palette};
use crate::data::model::LABEL_COLUMN;
use crate::render::DatasetPreview;

// ---------------------------------------------------------------------------
// Dataset preview
// ---------------------------------------------------------------------------

/// Render the leading rows as a table, with a row index column.
pub fn preview_table(ui: &mut Ui, preview: &DatasetPreview) {
    egui::ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(24.0))
                .columns(Column::auto().at_least(60.0), preview.columns.len())
                .header(20.0, |mut header| {
                    header.col(|_ui| {});
                    for name in &preview.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for (i, row) in preview.rows.iter().enumerate() {
                        body.row(18.0, |mut table_row| {
                            table_row.col(|ui: &mut Ui| {
                                ui.label(RichText::new(i.to_string()).weak());
                            });
                            for (name, value) in preview.columns.iter().zip(row) {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(format_cell(name, *value));
                                });
                            }
                        });
                    }
                });
        });
}

fn format_cell(column: &str, value: f64) -> String {
    if column == LABEL_COLUMN {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}

// ---------------------------------------------------------------------------
// Categorical bars (distribution + count plot)
// ---------------------------------------------------------------------------

/// Bars at x = 0, 1, … with the category names as tick labels.
fn categorical_bars(ui: &mut Ui, id: &str, x_label: &str, y_label: &str, categories: &[(String, f64)]) {
    let palette = generate_palette(categories.len());
    let bars: Vec<Bar> = categories
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((name, value), fill))| {
            Bar::new(i as f64, *value).width(0.6).name(name).fill(fill)
        })
        .collect();
    let tick_labels: Vec<String> = categories.iter().map(|(name, _)| name.clone()).collect();

    Plot::new(id)
        .height(300.0)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            tick_labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Diagnosis distribution bar chart.
pub fn bar_chart(ui: &mut Ui, chart: &charts::BarChart) {
    let categories: Vec<(String, f64)> = chart
        .bars
        .iter()
        .map(|b| (b.label.clone(), b.value))
        .collect();
    categorical_bars(ui, "distribution_plot", &chart.x_label, &chart.y_label, &categories);
}

/// Count plot of the raw diagnosis codes.
pub fn count_plot(ui: &mut Ui, plot: &CountPlot) {
    let categories: Vec<(String, f64)> = plot
        .counts
        .iter()
        .map(|(code, n)| (code.to_string(), *n as f64))
        .collect();
    categorical_bars(ui, "count_plot", &plot.x_label, "count", &categories);
}

// ---------------------------------------------------------------------------
// Pair plot
// ---------------------------------------------------------------------------

/// Render the k×k pair-plot grid with a diagnosis legend.
pub fn pair_plot(ui: &mut Ui, plot: &PairPlot, colors: &ColorMap) {
    let k = plot.dim();
    if k == 0 {
        return;
    }
    hue_legend(ui, colors);

    let spacing = 4.0;
    let size = ((ui.available_width() - spacing * k as f32) / k as f32).clamp(120.0, 240.0);

    egui::ScrollArea::horizontal()
        .id_salt("pair_scroll")
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("pair_grid")
                .spacing([spacing, spacing])
                .show(ui, |ui: &mut Ui| {
                    for row in 0..k {
                        for col in 0..k {
                            if let Some(cell) = plot.cell(row, col) {
                                pair_cell(ui, (row, col), k, cell, plot.show_grid, colors, size);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

fn hue_legend(ui: &mut Ui, colors: &ColorMap) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(LABEL_COLUMN).strong());
        for (label, color) in colors.legend_entries() {
            ui.label(RichText::new(format!("● {label}")).color(color));
        }
    });
}

fn pair_cell(
    ui: &mut Ui,
    (row, col): (usize, usize),
    k: usize,
    cell: &PairCell,
    show_grid: bool,
    colors: &ColorMap,
    size: f32,
) {
    let (x_name, y_name) = match cell {
        PairCell::Density { feature, .. } => (feature.as_str(), feature.as_str()),
        PairCell::Scatter {
            x_feature,
            y_feature,
            ..
        } => (x_feature.as_str(), y_feature.as_str()),
    };

    let bottom = row + 1 == k;
    let left = col == 0;
    let mut plot = Plot::new(("pair_cell", row, col))
        .width(size)
        .height(size)
        .show_grid(show_grid)
        .show_axes([bottom, left])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false);
    if bottom {
        plot = plot.x_axis_label(x_name);
    }
    if left {
        plot = plot.y_axis_label(y_name);
    }

    plot.show(ui, |plot_ui| match cell {
        PairCell::Density { curves, .. } => {
            for curve in curves {
                let color = colors.color_for(curve.diagnosis);
                plot_ui.line(
                    Line::new(PlotPoints::from(curve.points.clone()))
                        .color(color)
                        .fill(0.0)
                        .width(1.5),
                );
            }
        }
        PairCell::Scatter { series, .. } => {
            for s in series {
                plot_ui.points(
                    Points::new(PlotPoints::from(s.points.clone()))
                        .radius(1.5)
                        .color(colors.color_for(s.diagnosis)),
                );
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

const COLORBAR_STEPS: usize = 64;

/// Paint the annotated correlation matrix with a colour bar.
pub fn heatmap(ui: &mut Ui, heatmap: &Heatmap) {
    let n = heatmap.labels.len();
    if n == 0 {
        return;
    }
    let text_color = ui.visuals().text_color();
    let label_font = FontId::proportional(11.0);
    let cell_font = FontId::proportional(8.0);

    let label_extent = heatmap
        .labels
        .iter()
        .map(|l| {
            ui.painter()
                .layout_no_wrap(l.clone(), label_font.clone(), text_color)
                .size()
                .x
        })
        .fold(0.0_f32, f32::max)
        + 6.0;
    let colorbar_width = 70.0;
    let cell = ((ui.available_width() - label_extent - colorbar_width) / n as f32).clamp(18.0, 34.0);
    let grid = cell * n as f32;

    let (rect, _) = ui.allocate_exact_size(
        vec2(label_extent + grid + colorbar_width, grid + label_extent),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let origin = rect.min + vec2(label_extent, 0.0);

    for (i, row) in heatmap.values.iter().enumerate() {
        painter.text(
            pos2(origin.x - 4.0, origin.y + (i as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            &heatmap.labels[i],
            label_font.clone(),
            text_color,
        );
        for (j, &value) in row.iter().enumerate() {
            let r = Rect::from_min_size(
                origin + vec2(j as f32 * cell, i as f32 * cell),
                vec2(cell, cell),
            );
            let fill = color::coolwarm(value, heatmap.center, heatmap.span);
            painter.rect_filled(r, 0.0, fill);
            let text = if value.is_nan() {
                "nan".to_string()
            } else {
                format!("{value:.2}")
            };
            painter.text(
                r.center(),
                Align2::CENTER_CENTER,
                text,
                cell_font.clone(),
                color::annotation_color(fill),
            );
        }
    }

    // Column labels, rotated to read bottom-up under the grid.
    for (j, label) in heatmap.labels.iter().enumerate() {
        let galley = painter.layout_no_wrap(label.clone(), label_font.clone(), text_color);
        let pos = pos2(
            origin.x + (j as f32 + 0.5) * cell - galley.size().y / 2.0,
            origin.y + grid + 4.0 + galley.size().x,
        );
        painter.add(TextShape::new(pos, galley, text_color).with_angle(-FRAC_PI_2));
    }

    // Colour bar from +span (top) to -span (bottom).
    let bar = Rect::from_min_size(pos2(origin.x + grid + 12.0, origin.y), vec2(14.0, grid));
    let step = grid / COLORBAR_STEPS as f32;
    for s in 0..COLORBAR_STEPS {
        let t = 1.0 - 2.0 * (s as f64 + 0.5) / COLORBAR_STEPS as f64;
        let value = heatmap.center + t * heatmap.span;
        let seg = Rect::from_min_size(pos2(bar.min.x, bar.min.y + s as f32 * step), vec2(bar.width(), step + 0.5));
        painter.rect_filled(seg, 0.0, color::coolwarm(value, heatmap.center, heatmap.span));
    }
    painter.rect_stroke(bar, 0.0, Stroke::new(0.5, text_color), egui::StrokeKind::Inside);
    for (y, value) in [
        (bar.min.y, heatmap.center + heatmap.span),
        (bar.center().y, heatmap.center),
        (bar.max.y, heatmap.center - heatmap.span),
    ] {
        painter.text(
            pos2(bar.max.x + 4.0, y),
            Align2::LEFT_CENTER,
            format!("{value:.1}"),
            label_font.clone(),
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Layered per-diagnosis histogram with KDE overlays.
pub fn histogram(ui: &mut Ui, hist: &Histogram, colors: &ColorMap) {
    let width = hist.bin_width();
    Plot::new("histogram_plot")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label(hist.feature.as_str())
        .y_axis_label("Count")
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for group in &hist.groups {
                let color = colors.color_for(group.diagnosis);
                let name = group.diagnosis.to_string();
                let bars: Vec<Bar> = group
                    .counts
                    .iter()
                    .zip(&hist.edges)
                    .map(|(&count, &left)| {
                        Bar::new(left + width / 2.0, count as f64)
                            .width(width)
                            .fill(colors.translucent(group.diagnosis, 0.45))
                            .stroke(Stroke::new(0.5, color))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&name).color(color));
                if !group.kde.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(group.kde.clone()))
                            .name(&name)
                            .color(color)
                            .width(2.0),
                    );
                }
            }
        });
}
