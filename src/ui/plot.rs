use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{normalize, viridis};
use crate::data::DisasterDataset;
use crate::state::AppState;
use crate::stories;

const PLOT_HEIGHT: f32 = 320.0;
/// Number of discrete steps the severity colour scale is drawn with.
const COLOR_STEPS: f64 = 16.0;

// ---------------------------------------------------------------------------
// Story sections (central panel)
// ---------------------------------------------------------------------------

/// Render the four data stories, top to bottom.
pub fn stories(ui: &mut Ui, dataset: &DisasterDataset, state: &AppState) {
    section(ui, "🟦 Story 1: Global Disaster Patterns");
    distribution_chart(ui, dataset, state);
    caption(
        ui,
        "Which kinds of disaster happen most often, as context before looking deeper.",
    );

    section(ui, "🟧 Story 2: Events Over Time");
    trend_chart(ui, state);
    caption(
        ui,
        "The yearly flow shows how the number of events rises and falls from one year to the next.",
    );

    section(ui, "🔴 Story 3: Impact and Response Speed");
    impact_chart(ui, dataset, state);
    caption(
        ui,
        "How fast the response arrived against how many lives were lost; bubble size is severity.",
    );

    section(ui, "🟩 Story 4: Post-Disaster Recovery");
    recovery_chart(ui, dataset, state);
    caption(
        ui,
        "The story closes on recovery, linking the first response to its long-term outcome.",
    );
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
}

fn caption(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).italics().weak());
    ui.separator();
}

// ---------------------------------------------------------------------------
// Story 1 – count per disaster type
// ---------------------------------------------------------------------------

fn distribution_chart(ui: &mut Ui, dataset: &DisasterDataset, state: &AppState) {
    let distribution = stories::type_distribution(dataset, &state.view);
    let labels: Vec<String> = distribution
        .iter()
        .map(|c| c.disaster_type.clone())
        .collect();

    Plot::new("type_distribution")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Disaster type")
        .x_axis_formatter(move |mark, _range| stories::category_label(&labels, mark.value))
        .y_axis_label("Events")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, category) in distribution.iter().enumerate() {
                let color = state.type_colors.color_for(&category.disaster_type);
                let bar = Bar::new(i as f64, category.count as f64)
                    .name(&category.disaster_type)
                    .fill(color)
                    .width(0.7);
                let chart = BarChart::new(vec![bar])
                    .name(&category.disaster_type)
                    .color(color);
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Story 2 – yearly trend
// ---------------------------------------------------------------------------

fn trend_chart(ui: &mut Ui, state: &AppState) {
    let trend = stories::yearly_trend(&state.yearly);
    let color = Color32::from_rgb(255, 127, 14);

    Plot::new("yearly_trend")
        .height(PLOT_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Number of events")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(trend.clone()))
                    .name("events")
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(trend))
                    .name("events")
                    .color(color)
                    .radius(4.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Story 3 – response time vs casualties, sized by severity
// ---------------------------------------------------------------------------

fn impact_chart(ui: &mut Ui, dataset: &DisasterDataset, state: &AppState) {
    let points = stories::impact_points(dataset, &state.view);
    let max_severity = stories::severity_range(dataset, &state.view)
        .map(|(_, hi)| hi)
        .unwrap_or(0.0);

    // One series per (type, rounded radius): egui_plot sizes per series.
    let mut series: BTreeMap<(&str, u32), Vec<[f64; 2]>> = BTreeMap::new();
    for p in &points {
        let Some(casualties) = p.casualties else {
            continue;
        };
        let radius = stories::marker_radius(p.severity_index, max_severity).round() as u32;
        series
            .entry((p.disaster_type.as_str(), radius))
            .or_default()
            .push([p.response_time_hours, casualties as f64]);
    }

    Plot::new("impact_response")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Response time (hours)")
        .y_axis_label("Casualties")
        .show(ui, |plot_ui| {
            for ((disaster_type, radius), xy) in series {
                let color = state.type_colors.color_for(disaster_type);
                plot_ui.points(
                    Points::new(PlotPoints::new(xy))
                        .name(disaster_type)
                        .color(color.gamma_multiply(0.7))
                        .radius(radius as f32)
                        .filled(true),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Story 4 – response time vs recovery days, coloured by severity
// ---------------------------------------------------------------------------

fn recovery_chart(ui: &mut Ui, dataset: &DisasterDataset, state: &AppState) {
    let points = stories::recovery_points(dataset, &state.view);
    let (lo, hi) = stories::severity_range(dataset, &state.view).unwrap_or((0.0, 0.0));

    let mut buckets: BTreeMap<u32, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &points {
        let t = normalize(p.severity_index, lo, hi).clamp(0.0, 1.0);
        let step = (t * (COLOR_STEPS - 1.0)).round() as u32;
        buckets
            .entry(step)
            .or_default()
            .push([p.response_time_hours, p.recovery_days]);
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.weak(format!("severity {lo:.1}"));
        for step in 0..COLOR_STEPS as u32 {
            let color = viridis(step as f64 / (COLOR_STEPS - 1.0));
            ui.label(RichText::new("■").color(color));
        }
        ui.weak(format!("{hi:.1}"));
    });

    Plot::new("recovery")
        .height(PLOT_HEIGHT)
        .x_axis_label("Response time (hours)")
        .y_axis_label("Recovery (days)")
        .show(ui, |plot_ui| {
            for (step, xy) in buckets {
                let color = viridis(step as f64 / (COLOR_STEPS - 1.0));
                plot_ui.points(Points::new(PlotPoints::new(xy)).color(color).radius(3.0));
            }
        });
}
