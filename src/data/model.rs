use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// DisasterEvent – one row of the source table
// ---------------------------------------------------------------------------

/// A single disaster event (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterEvent {
    date: NaiveDate,
    year: i32,
    /// Category label, e.g. `Flood` or `Earthquake`.
    pub disaster_type: String,
    /// Blank numeric cells load as `NaN`.
    pub response_time_hours: f64,
    /// `None` when the source cell was blank.
    pub casualties: Option<u64>,
    /// Drives both marker size and the continuous colour scale.
    pub severity_index: f64,
    pub recovery_days: f64,
    /// Every cell as read from the source, aligned with
    /// [`DisasterDataset::columns`].
    pub source_cells: Vec<String>,
}

impl DisasterEvent {
    /// Build an event; `year` is derived from `date`.
    pub fn new(
        date: NaiveDate,
        disaster_type: impl Into<String>,
        response_time_hours: f64,
        casualties: u64,
        severity_index: f64,
        recovery_days: f64,
    ) -> Self {
        Self {
            date,
            year: date.year(),
            disaster_type: disaster_type.into(),
            response_time_hours,
            casualties: Some(casualties),
            severity_index,
            recovery_days,
            source_cells: Vec::new(),
        }
    }

    pub fn with_source_cells(mut self, cells: Vec<String>) -> Self {
        self.source_cells = cells;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

// ---------------------------------------------------------------------------
// DisasterDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built: every "change" the UI
/// makes is expressed as a [`FilteredView`](super::filter::FilteredView).
#[derive(Debug, Clone, Default)]
pub struct DisasterDataset {
    events: Vec<DisasterEvent>,
    /// Source column names in source order.
    columns: Vec<String>,
    /// Distinct types in order of first appearance.
    disaster_types: Vec<String>,
    year_bounds: Option<(i32, i32)>,
}

impl DisasterDataset {
    /// Build the type and year indices from the loaded events.
    pub fn from_events(events: Vec<DisasterEvent>, columns: Vec<String>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut disaster_types = Vec::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for ev in &events {
            if seen.insert(ev.disaster_type.as_str()) {
                disaster_types.push(ev.disaster_type.clone());
            }
            year_bounds = Some(match year_bounds {
                None => (ev.year, ev.year),
                Some((lo, hi)) => (lo.min(ev.year), hi.max(ev.year)),
            });
        }

        DisasterDataset {
            events,
            columns,
            disaster_types,
            year_bounds,
        }
    }

    pub fn events(&self) -> &[DisasterEvent] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&DisasterEvent> {
        self.events.get(index)
    }

    /// Header names of the cells carried in [`DisasterEvent::source_cells`].
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn disaster_types(&self) -> &[String] {
        &self.disaster_types
    }

    /// `(min, max)` of the observed years, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.year_bounds
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
