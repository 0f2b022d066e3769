use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Chart artifacts
//
// Plain data produced by the views and consumed by `ui::plot`. Nothing here
// knows about egui.
// ---------------------------------------------------------------------------

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Categorical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// Points of one diagnosis group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSeries {
    pub diagnosis: Diagnosis,
    pub points: Vec<[f64; 2]>,
}

/// A single cell of the pair-plot grid.
#[derive(Debug, Clone, PartialEq)]
pub enum PairCell {
    /// Diagonal: density of `feature` per group.
    Density {
        feature: String,
        curves: Vec<GroupSeries>,
    },
    /// Off-diagonal: `y_feature` against `x_feature` per group.
    Scatter {
        x_feature: String,
        y_feature: String,
        series: Vec<GroupSeries>,
    },
}

/// All-pairs grid over the selected features.
#[derive(Debug, Clone, PartialEq)]
pub struct PairPlot {
    pub features: Vec<String>,
    /// `features.len()²` cells, row-major.
    pub cells: Vec<PairCell>,
    pub show_grid: bool,
}

impl PairPlot {
    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.features.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PairCell> {
        if row >= self.dim() || col >= self.dim() {
            return None;
        }
        self.cells.get(row * self.dim() + col)
    }
}

/// Annotated square matrix on a diverging scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub labels: Vec<String>,
    /// Row-major, `labels.len()` × `labels.len()`.
    pub values: Vec<Vec<f64>>,
    /// Value mapped to the neutral colour.
    pub center: f64,
    /// Largest absolute distance from `center` among finite values.
    pub span: f64,
}

/// Counts of one diagnosis group over shared bins.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramGroup {
    pub diagnosis: Diagnosis,
    pub counts: Vec<usize>,
    /// KDE overlay scaled to counts; empty when the group is degenerate.
    pub kde: Vec<[f64; 2]>,
}

/// Layered per-group histogram of one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub feature: String,
    /// `bins + 1` edges shared by every group.
    pub edges: Vec<f64>,
    pub groups: Vec<HistogramGroup>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.bins() > 0 => (hi - lo) / self.bins() as f64,
            _ => 0.0,
        }
    }
}

/// Count of each raw diagnosis code.
#[derive(Debug, Clone, PartialEq)]
pub struct CountPlot {
    pub x_label: String,
    /// `(code, count)` in ascending code order.
    pub counts: Vec<(i64, usize)>,
}
