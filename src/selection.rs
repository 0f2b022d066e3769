use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Histogram bin count
// ---------------------------------------------------------------------------

/// Number of histogram bins, always within [`BinCount::MIN`, `BinCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinCount(usize);

impl BinCount {
    pub const MIN: usize = 5;
    pub const MAX: usize = 50;
    pub const DEFAULT: usize = 20;

    /// Clamp any requested count into range.
    pub fn new(requested: usize) -> Self {
        BinCount(requested.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BinCount {
    fn default() -> Self {
        BinCount(Self::DEFAULT)
    }
}

impl From<usize> for BinCount {
    fn from(requested: usize) -> Self {
        BinCount::new(requested)
    }
}

// ---------------------------------------------------------------------------
// Widget values
// ---------------------------------------------------------------------------

/// Current values of every dashboard widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Features for the pair plot, in selection order. May be empty.
    pub pair_features: Vec<String>,
    /// Draw gridlines on every pair-plot cell.
    pub show_grid: bool,
    /// Feature shown in the histogram.
    pub histogram_feature: String,
    pub bins: BinCount,
}

impl Selection {
    /// Initial widget values for `dataset`: nothing selected for the pair
    /// plot, gridlines on, first feature in the histogram, 20 bins.
    pub fn defaults_for(dataset: &Dataset) -> Self {
        Selection {
            pair_features: Vec::new(),
            show_grid: true,
            histogram_feature: dataset.feature_names().first().cloned().unwrap_or_default(),
            bins: BinCount::default(),
        }
    }

    /// Add or remove a feature from the pair-plot selection.
    pub fn toggle_pair_feature(&mut self, feature: &str) {
        if let Some(pos) = self.pair_features.iter().position(|f| f == feature) {
            self.pair_features.remove(pos);
        } else {
            self.pair_features.push(feature.to_string());
        }
    }

    pub fn set_bins(&mut self, requested: usize) {
        self.bins = BinCount::new(requested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled::load_breast_cancer;

    #[test]
    fn test_bin_count_clamped() {
        assert_eq!(BinCount::new(0).get(), 5);
        assert_eq!(BinCount::new(4).get(), 5);
        assert_eq!(BinCount::new(5).get(), 5);
        assert_eq!(BinCount::new(30).get(), 30);
        assert_eq!(BinCount::new(50).get(), 50);
        assert_eq!(BinCount::new(51).get(), 50);
        assert_eq!(BinCount::from(usize::MAX).get(), 50);
        assert_eq!(BinCount::default().get(), 20);
    }

    #[test]
    fn test_set_bins_clamps() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.set_bins(1000);
        assert_eq!(sel.bins.get(), 50);
        sel.set_bins(1);
        assert_eq!(sel.bins.get(), 5);
    }

    #[test]
    fn test_defaults() {
        let ds = load_breast_cancer().unwrap();
        let sel = Selection::defaults_for(&ds);
        assert!(sel.pair_features.is_empty());
        assert!(sel.show_grid);
        assert_eq!(sel.histogram_feature, "mean radius");
        assert_eq!(sel.bins.get(), 20);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let ds = load_breast_cancer().unwrap();
        let mut sel = Selection::defaults_for(&ds);
        sel.toggle_pair_feature("mean texture");
        sel.toggle_pair_feature("mean radius");
        assert_eq!(sel.pair_features, vec!["mean texture", "mean radius"]);
        sel.toggle_pair_feature("mean texture");
        assert_eq!(sel.pair_features, vec!["mean radius"]);
    }
}
