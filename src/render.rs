use crate::charts::{BarChart, CountPlot, Heatmap, Histogram, PairPlot};
use crate::data::model::Dataset;
use crate::selection::Selection;
use crate::views::{self, ViewError};

/// Leading rows of the table, all columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl DatasetPreview {
    pub fn head(dataset: &Dataset, n: usize) -> Self {
        DatasetPreview {
            columns: dataset.column_names(),
            rows: (0..n.min(dataset.n_rows()))
                .filter_map(|i| dataset.row(i))
                .collect(),
        }
    }
}

/// Everything one pass over the page produces. Each view carries its own
/// result so a failing view does not hide the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutputs {
    pub preview: DatasetPreview,
    pub distribution: Result<BarChart, ViewError>,
    /// `Ok(None)` when no features are selected.
    pub pair_plot: Result<Option<PairPlot>, ViewError>,
    pub heatmap: Result<Heatmap, ViewError>,
    pub histogram: Result<Histogram, ViewError>,
    pub count_plot: Result<CountPlot, ViewError>,
}

/// Evaluate every view, top to bottom, from the current widget values.
pub fn render(dataset: &Dataset, selection: &Selection, preview_rows: usize) -> ViewOutputs {
    ViewOutputs {
        preview: DatasetPreview::head(dataset, preview_rows),
        distribution: views::diagnosis_distribution(dataset),
        pair_plot: views::pair_plot(dataset, &selection.pair_features, selection.show_grid),
        heatmap: views::correlation_heatmap(dataset),
        histogram: views::feature_histogram(dataset, &selection.histogram_feature, selection.bins),
        count_plot: views::diagnosis_count_plot(dataset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PairCell;
    use crate::data::bundled::load_breast_cancer;
    use crate::selection::BinCount;

    #[test]
    fn test_default_page() {
        let ds = load_breast_cancer().unwrap();
        let sel = Selection::defaults_for(&ds);
        let out = render(&ds, &sel, 5);

        assert_eq!(out.preview.columns.len(), 31);
        assert_eq!(out.preview.rows.len(), 5);
        assert!(out.preview.rows.iter().all(|r| r.len() == 31));

        let dist = out.distribution.unwrap();
        assert_eq!(dist.bars.len(), 2);
        assert_eq!(dist.bars.iter().map(|b| b.value).sum::<f64>(), 569.0);

        assert_eq!(out.pair_plot, Ok(None));
        assert_eq!(out.heatmap.unwrap().values.len(), 31);
        let hist = out.histogram.unwrap();
        assert_eq!(hist.feature, "mean radius");
        assert_eq!(hist.bins(), 20);
        let counts = out.count_plot.unwrap();
        assert_eq!(counts.counts.iter().map(|(_, n)| n).sum::<usize>(), 569);
    }

    #[test]
    fn test_pair_plot_two_features_without_grid() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.toggle_pair_feature("mean radius");
        sel.toggle_pair_feature("mean texture");
        sel.show_grid = false;

        let plot = render(&ds, &sel, 5).pair_plot.unwrap().unwrap();
        assert_eq!(plot.dim(), 2);
        assert_eq!(plot.cells.len(), 4);
        assert!(!plot.show_grid);
        assert!(matches!(plot.cell(1, 1), Some(PairCell::Density { feature, .. }) if feature == "mean texture"));
        assert!(matches!(plot.cell(1, 0), Some(PairCell::Scatter { .. })));
    }

    #[test]
    fn test_histogram_mean_area_thirty_bins() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.histogram_feature = "mean area".into();
        sel.bins = BinCount::new(30);

        let hist = render(&ds, &sel, 5).histogram.unwrap();
        assert_eq!(hist.bins(), 30);
        assert_eq!(hist.groups.len(), 2);
        assert!(hist.groups.iter().all(|g| g.counts.len() == 30));
    }

    #[test]
    fn test_out_of_range_bins_are_clamped() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.set_bins(500);
        assert_eq!(render(&ds, &sel, 5).histogram.unwrap().bins(), 50);
        sel.set_bins(2);
        assert_eq!(render(&ds, &sel, 5).histogram.unwrap().bins(), 5);
    }

    #[test]
    fn test_failing_view_is_isolated() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.histogram_feature = "not a feature".into();

        let out = render(&ds, &sel, 5);
        assert!(out.histogram.is_err());
        assert!(out.distribution.is_ok());
        assert!(out.heatmap.is_ok());
        assert!(out.count_plot.is_ok());
    }

    #[test]
    fn test_preview_shorter_than_requested() {
        let ds = load_breast_cancer().unwrap();
        assert_eq!(DatasetPreview::head(&ds, 1000).rows.len(), 569);
        assert!(DatasetPreview::head(&ds, 0).rows.is_empty());
    }
}
