use std::collections::BTreeSet;

use super::aggregate::{count_by_year, YearlyCount};
use super::model::{DisasterDataset, DisasterEvent};

// ---------------------------------------------------------------------------
// Filter selection: year range plus selected disaster types
// ---------------------------------------------------------------------------

/// The user's current year-range and disaster-type choices.
///
/// Bounds are not clamped to the dataset: a range outside the observed
/// years, or one with `year_min > year_max`, simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub year_min: i32,
    pub year_max: i32,
    pub selected_types: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<I, S>(year_min: i32, year_max: i32, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            year_min,
            year_max,
            selected_types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Full observed year range with every type selected (i.e., show everything).
    pub fn everything(dataset: &DisasterDataset) -> Self {
        let (year_min, year_max) = dataset.year_bounds().unwrap_or((0, 0));
        Self::new(year_min, year_max, dataset.disaster_types().iter().cloned())
    }

    /// Whether a single event passes the selection.
    pub fn matches(&self, event: &DisasterEvent) -> bool {
        (self.year_min..=self.year_max).contains(&event.year())
            && self.selected_types.contains(&event.disaster_type)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Indices of the events passing a [`FilterSelection`], in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Resolve the view against the dataset it was computed from.
    pub fn events<'a>(
        &'a self,
        dataset: &'a DisasterDataset,
    ) -> impl Iterator<Item = &'a DisasterEvent> + 'a {
        self.indices.iter().filter_map(move |&i| dataset.get(i))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the view of events that pass `selection`.
pub fn filter(dataset: &DisasterDataset, selection: &FilterSelection) -> FilteredView {
    if selection.selected_types.is_empty() {
        // Nothing selected → hide everything
        return FilteredView::default();
    }
    let indices = dataset
        .events()
        .iter()
        .enumerate()
        .filter(|(_, ev)| selection.matches(ev))
        .map(|(i, _)| i)
        .collect();
    FilteredView { indices }
}

/// Run the whole pipeline: filter, then count events per year.
pub fn apply(
    dataset: &DisasterDataset,
    selection: &FilterSelection,
) -> (FilteredView, YearlyCount) {
    let view = filter(dataset, selection);
    let yearly = count_by_year(dataset, &view);
    log::debug!(
        "filter {}..={} over {} types: {} of {} events in {} years",
        selection.year_min,
        selection.year_max,
        selection.selected_types.len(),
        view.len(),
        dataset.len(),
        yearly.len()
    );
    (view, yearly)
}
