use crate::color::CategoryColors;
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::{Dimension, FleetDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<FleetDataset>,

    /// Current per-dimension selections.
    pub selection: Selection,

    /// Indices of records passing the current selection (cached per frame).
    pub visible_indices: Vec<usize>,

    /// Colours for the scatter's ship-type series.
    pub ship_colors: Option<CategoryColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset, select everything, colour ship types.
    pub fn set_dataset(&mut self, dataset: FleetDataset) {
        self.selection = Selection::all_of(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.ship_colors = Some(CategoryColors::new(dataset.distinct(Dimension::ShipType)));

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.selection);
        }
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.selection.selected_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            *self.selection.selected_mut(dim) = ds.distinct(dim).iter().cloned().collect();
            self.refilter();
        }
    }

    /// Deselect all values in a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.selected_mut(dim).clear();
        self.refilter();
    }
}
