use crate::color::ColorMap;
use crate::data::{apply, DisasterDataset, FilterSelection, FilteredView, YearlyCount};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset itself is owned
/// by the app and lent to every call that needs it.
pub struct AppState {
    /// Current year range and type choices.
    pub selection: FilterSelection,

    /// Events passing the current selection (cached).
    pub view: FilteredView,

    /// Per-year counts over `view` (cached).
    pub yearly: YearlyCount,

    /// Colour per disaster type, fixed for the whole session.
    pub type_colors: ColorMap,

    /// Whether the raw-data preview is expanded.
    pub show_preview: bool,
}

impl AppState {
    /// Start with everything selected.
    pub fn new(dataset: &DisasterDataset) -> Self {
        let selection = FilterSelection::everything(dataset);
        let (view, yearly) = apply(dataset, &selection);
        Self {
            selection,
            view,
            yearly,
            type_colors: ColorMap::new(dataset.disaster_types()),
            show_preview: false,
        }
    }

    /// Recompute `view` and `yearly` after a selection change.
    pub fn refilter(&mut self, dataset: &DisasterDataset) {
        let (view, yearly) = apply(dataset, &self.selection);
        self.view = view;
        self.yearly = yearly;
    }

    /// Move the lower handle; the upper handle is pushed along if crossed.
    pub fn set_year_min(&mut self, dataset: &DisasterDataset, year: i32) {
        self.selection.year_min = year;
        if self.selection.year_max < year {
            self.selection.year_max = year;
        }
        self.refilter(dataset);
    }

    /// Move the upper handle; the lower handle is pushed along if crossed.
    pub fn set_year_max(&mut self, dataset: &DisasterDataset, year: i32) {
        self.selection.year_max = year;
        if self.selection.year_min > year {
            self.selection.year_min = year;
        }
        self.refilter(dataset);
    }

    /// Toggle a single disaster type in the selection.
    pub fn toggle_type(&mut self, dataset: &DisasterDataset, disaster_type: &str) {
        let selected = &mut self.selection.selected_types;
        if !selected.remove(disaster_type) {
            selected.insert(disaster_type.to_string());
        }
        self.refilter(dataset);
    }

    /// Select all types.
    pub fn select_all_types(&mut self, dataset: &DisasterDataset) {
        self.selection.selected_types = dataset.disaster_types().iter().cloned().collect();
        self.refilter(dataset);
    }

    /// Deselect all types.
    pub fn select_no_types(&mut self, dataset: &DisasterDataset) {
        self.selection.selected_types.clear();
        self.refilter(dataset);
    }

    pub fn is_selected(&self, disaster_type: &str) -> bool {
        self.selection.selected_types.contains(disaster_type)
    }
}
