use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::DisasterDataset;

/// Number of events per year in a [`FilteredView`]. Only years that occur in
/// the view are keys; iteration is ascending by year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyCount(BTreeMap<i32, usize>);

impl YearlyCount {
    pub fn get(&self, year: i32) -> Option<usize> {
        self.0.get(&year).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.0.iter().map(|(&y, &n)| (y, n))
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts; equals the length of the view it came from.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

/// Group the view by year and count rows.
pub fn count_by_year(dataset: &DisasterDataset, view: &FilteredView) -> YearlyCount {
    let mut counts = BTreeMap::new();
    for ev in view.events(dataset) {
        *counts.entry(ev.year()).or_insert(0) += 1;
    }
    YearlyCount(counts)
}
