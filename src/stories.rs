//! Chart-ready projections of the pipeline output, one per data story.
//!
//! These never re-filter: every function takes the [`FilteredView`] (or the
//! [`YearlyCount`]) that [`apply`](crate::data::apply) produced and only
//! reshapes it for drawing.

use crate::config::MAX_PREVIEW_ROWS;
use crate::data::{DisasterDataset, DisasterEvent, FilteredView, YearlyCount};

/// Smallest and largest bubble radius, in points.
pub const MIN_RADIUS: f32 = 2.0;
pub const MAX_RADIUS: f32 = 12.0;

/// Story 1: events per disaster type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub disaster_type: String,
    pub count: usize,
}

/// Story 3: one bubble of the impact / response scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactPoint {
    pub response_time_hours: f64,
    /// `None` rows have no y position and are left off the chart.
    pub casualties: Option<u64>,
    pub severity_index: f64,
    pub disaster_type: String,
}

/// Story 4: one marker of the recovery scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryPoint {
    pub response_time_hours: f64,
    pub recovery_days: f64,
    pub severity_index: f64,
}

/// Count events per type, ordered by first appearance in the view.
pub fn type_distribution(dataset: &DisasterDataset, view: &FilteredView) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = Vec::new();
    for ev in view.events(dataset) {
        match out.iter_mut().find(|c| c.disaster_type == ev.disaster_type) {
            Some(c) => c.count += 1,
            None => out.push(CategoryCount {
                disaster_type: ev.disaster_type.clone(),
                count: 1,
            }),
        }
    }
    out
}

/// `[year, count]` pairs in ascending year.
pub fn yearly_trend(yearly: &YearlyCount) -> Vec<[f64; 2]> {
    yearly.iter().map(|(y, n)| [y as f64, n as f64]).collect()
}

pub fn impact_points(dataset: &DisasterDataset, view: &FilteredView) -> Vec<ImpactPoint> {
    view.events(dataset)
        .map(|ev| ImpactPoint {
            response_time_hours: ev.response_time_hours,
            casualties: ev.casualties,
            severity_index: ev.severity_index,
            disaster_type: ev.disaster_type.clone(),
        })
        .collect()
}

pub fn recovery_points(dataset: &DisasterDataset, view: &FilteredView) -> Vec<RecoveryPoint> {
    view.events(dataset)
        .map(|ev| RecoveryPoint {
            response_time_hours: ev.response_time_hours,
            recovery_days: ev.recovery_days,
            severity_index: ev.severity_index,
        })
        .collect()
}

/// First `limit` rows of the view, capped at [`MAX_PREVIEW_ROWS`].
pub fn preview<'a>(
    dataset: &'a DisasterDataset,
    view: &'a FilteredView,
    limit: usize,
) -> Vec<&'a DisasterEvent> {
    view.events(dataset)
        .take(limit.min(MAX_PREVIEW_ROWS))
        .collect()
}

/// Preview header: the source columns in source order, then the derived year.
pub fn preview_columns(dataset: &DisasterDataset) -> Vec<&str> {
    dataset
        .columns()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once("year"))
        .collect()
}

/// Preview cells for one row: source text as read, then the derived year.
pub fn preview_cells(event: &DisasterEvent) -> Vec<String> {
    let mut cells = event.source_cells.clone();
    cells.push(event.year().to_string());
    cells
}

/// Axis tick label for a bar placed at index `position`; ticks between bars
/// stay blank.
pub fn category_label(labels: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Bubble radius for a severity, scaled against the largest severity shown.
/// Negative and non-finite severities get the minimum radius.
pub fn marker_radius(severity: f64, max_severity: f64) -> f32 {
    if !(severity.is_finite() && max_severity.is_finite()) || max_severity <= 0.0 {
        return MIN_RADIUS;
    }
    let share = (severity / max_severity).clamp(0.0, 1.0) as f32;
    MIN_RADIUS + share * (MAX_RADIUS - MIN_RADIUS)
}

/// `(min, max)` severity in the view, `None` when it is empty.
pub fn severity_range(dataset: &DisasterDataset, view: &FilteredView) -> Option<(f64, f64)> {
    view.events(dataset)
        .map(|ev| ev.severity_index)
        .filter(|s| s.is_finite())
        .fold(None, |acc, s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
}
