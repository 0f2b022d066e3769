//! The five chart views.
//!
//! Each view is a pure function of the dataset and the widget values it
//! reads, returning a chart artifact or a [`ViewError`].

use thiserror::Error;

use crate::charts::{
    Bar, BarChart, CountPlot, GroupSeries, Heatmap, Histogram, HistogramGroup, PairCell, PairPlot,
};
use crate::data::model::{Dataset, Diagnosis, LABEL_COLUMN};
use crate::selection::BinCount;
use crate::stats::{self, GaussianKde};

/// Points on each KDE curve.
const KDE_GRIDSIZE: usize = 200;
/// Bandwidths past the data range drawn on pair-plot diagonals.
const PAIR_KDE_CUT: f64 = 3.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),
    #[error("feature '{0}' has no finite values")]
    NoFiniteValues(String),
}

fn feature<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a [f64], ViewError> {
    dataset
        .feature(name)
        .ok_or_else(|| ViewError::UnknownFeature(name.to_string()))
}

// ---------------------------------------------------------------------------
// Diagnosis distribution
// ---------------------------------------------------------------------------

/// Bar chart of rows per diagnosis, relabelled by name, most frequent first.
pub fn diagnosis_distribution(dataset: &Dataset) -> Result<BarChart, ViewError> {
    let bars = stats::value_counts(dataset.diagnosis())
        .into_iter()
        .map(|(d, count)| Bar {
            label: d.label().to_string(),
            value: count as f64,
        })
        .collect();
    Ok(BarChart {
        x_label: "Diagnosis".to_string(),
        y_label: "Count".to_string(),
        bars,
    })
}

// ---------------------------------------------------------------------------
// Pair plot
// ---------------------------------------------------------------------------

/// All-pairs grid over `features`, grouped by diagnosis.
///
/// An empty selection yields `Ok(None)`. There is no cap on the number of
/// features; the grid grows quadratically.
pub fn pair_plot(
    dataset: &Dataset,
    features: &[String],
    show_grid: bool,
) -> Result<Option<PairPlot>, ViewError> {
    if features.is_empty() {
        return Ok(None);
    }
    let columns = features
        .iter()
        .map(|f| feature(dataset, f))
        .collect::<Result<Vec<_>, _>>()?;

    let n_rows = dataset.n_rows() as f64;
    let mut cells = Vec::with_capacity(features.len() * features.len());
    for (r, y_values) in columns.iter().enumerate() {
        for (c, x_values) in columns.iter().enumerate() {
            let cell = if r == c {
                let curves = Diagnosis::ALL
                    .iter()
                    .filter_map(|&d| {
                        let group = group_values(dataset, &features[r], d);
                        let kde = skip_degenerate(GaussianKde::new(&group), &features[r], d)?;
                        // Common normalisation: weight by the group's share of rows.
                        let weight = group.len() as f64 / n_rows;
                        let points = kde
                            .curve(KDE_GRIDSIZE, PAIR_KDE_CUT)
                            .into_iter()
                            .map(|[x, y]| [x, y * weight])
                            .collect();
                        Some(GroupSeries { diagnosis: d, points })
                    })
                    .collect();
                PairCell::Density {
                    feature: features[r].clone(),
                    curves,
                }
            } else {
                let series = Diagnosis::ALL
                    .iter()
                    .map(|&d| GroupSeries {
                        diagnosis: d,
                        points: x_values
                            .iter()
                            .zip(y_values.iter())
                            .zip(dataset.diagnosis())
                            .filter(|(_, label)| **label == d)
                            .map(|((&x, &y), _)| [x, y])
                            .collect(),
                    })
                    .collect();
                PairCell::Scatter {
                    x_feature: features[c].clone(),
                    y_feature: features[r].clone(),
                    series,
                }
            };
            cells.push(cell);
        }
    }

    Ok(Some(PairPlot {
        features: features.to_vec(),
        cells,
        show_grid,
    }))
}

/// Finite values of `name` for one diagnosis group.
fn group_values(dataset: &Dataset, name: &str, label: Diagnosis) -> Vec<f64> {
    dataset
        .feature_by_diagnosis(name, label)
        .unwrap_or_default()
        .into_iter()
        .filter(|v| v.is_finite())
        .collect()
}

fn skip_degenerate(kde: Option<GaussianKde>, feature: &str, label: Diagnosis) -> Option<GaussianKde> {
    if kde.is_none() {
        log::warn!("Skipping density of '{feature}' for diagnosis {label}: too few distinct values");
    }
    kde
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Pearson correlation across every column, label included.
pub fn correlation_heatmap(dataset: &Dataset) -> Result<Heatmap, ViewError> {
    let labels = dataset.column_names();
    let columns = labels
        .iter()
        .map(|name| {
            dataset
                .column(name)
                .ok_or_else(|| ViewError::UnknownFeature(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let values = stats::correlation_matrix(&columns);
    let span = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    Ok(Heatmap {
        labels,
        values,
        center: 0.0,
        span,
    })
}

// ---------------------------------------------------------------------------
// Feature histogram
// ---------------------------------------------------------------------------

/// Histogram of `feature_name` with `bins` shared bins, layered by diagnosis,
/// with a KDE overlay per group scaled to counts.
pub fn feature_histogram(
    dataset: &Dataset,
    feature_name: &str,
    bins: BinCount,
) -> Result<Histogram, ViewError> {
    let values = feature(dataset, feature_name)?;
    let edges = stats::bin_edges(values, bins.get())
        .ok_or_else(|| ViewError::NoFiniteValues(feature_name.to_string()))?;
    let bin_width = (edges[edges.len() - 1] - edges[0]) / bins.get() as f64;

    let groups = Diagnosis::ALL
        .iter()
        .map(|&d| {
            let group = group_values(dataset, feature_name, d);
            let counts = stats::histogram_counts(&group, &edges);
            let scale = group.len() as f64 * bin_width;
            let kde = skip_degenerate(GaussianKde::new(&group), feature_name, d)
                .map(|kde| {
                    kde.curve(KDE_GRIDSIZE, 0.0)
                        .into_iter()
                        .map(|[x, y]| [x, y * scale])
                        .collect()
                })
                .unwrap_or_default();
            HistogramGroup {
                diagnosis: d,
                counts,
                kde,
            }
        })
        .collect();

    Ok(Histogram {
        feature: feature_name.to_string(),
        edges,
        groups,
    })
}

// ---------------------------------------------------------------------------
// Diagnosis count plot
// ---------------------------------------------------------------------------

/// Count of each raw diagnosis code, ascending by code.
pub fn diagnosis_count_plot(dataset: &Dataset) -> Result<CountPlot, ViewError> {
    let mut counts: Vec<(i64, usize)> = stats::value_counts(dataset.diagnosis())
        .into_iter()
        .map(|(d, n)| (d.code(), n))
        .collect();
    counts.sort_by_key(|(code, _)| *code);
    Ok(CountPlot {
        x_label: LABEL_COLUMN.to_string(),
        counts,
    })
}
