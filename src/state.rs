use crate::color::ColorMap;
use crate::data::model::Dataset;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at start-up and never replaced.
    dataset: Dataset,

    /// Current widget values.
    pub selection: Selection,

    /// Rows shown in the dataset preview.
    pub preview_rows: usize,

    /// Colours of the two diagnosis groups.
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: Dataset, preview_rows: usize) -> Self {
        let selection = Selection::defaults_for(&dataset);
        Self {
            dataset,
            selection,
            preview_rows,
            color_map: ColorMap::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled::{N_ROWS, load_breast_cancer};

    #[test]
    fn test_new_state_starts_from_defaults() {
        let state = AppState::new(load_breast_cancer().unwrap(), 7);
        assert_eq!(state.dataset().n_rows(), N_ROWS);
        assert_eq!(state.dataset().n_columns(), 31);
        assert_eq!(state.selection, Selection::defaults_for(state.dataset()));
        assert_eq!(state.preview_rows, 7);
    }
}
