use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: disaster type → Color32
// ---------------------------------------------------------------------------

/// Maps each disaster type to a distinct colour. Built once from the full
/// dataset so a type keeps its colour whatever the filter.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(types: &[String]) -> Self {
        let palette = generate_palette(types.len());
        let mapping = types.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given disaster type.
    pub fn color_for(&self, disaster_type: &str) -> Color32 {
        self.mapping
            .get(disaster_type)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale
// ---------------------------------------------------------------------------

/// Anchor stops of the viridis colour scale (sRGB).
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Viridis colour at `t` in `[0, 1]`; values outside are clamped and NaN
/// maps to the low end.
pub fn viridis(t: f64) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
    let last = VIRIDIS.len() - 1;
    let scaled = t * last as f32;
    let i = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - i as f32;

    let lo = linear(VIRIDIS[i]);
    let hi = linear(VIRIDIS[i + 1]);
    // Interpolate in linear light, then encode back to sRGB.
    let mixed = LinSrgb::new(
        lo.red + (hi.red - lo.red) * frac,
        lo.green + (hi.green - lo.green) * frac,
        lo.blue + (hi.blue - lo.blue) * frac,
    );
    to_color32(Srgb::from_linear(mixed))
}

fn linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

/// Position of `value` inside `[min, max]`, `0.5` when the range is empty.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !range.is_finite() || range.abs() < f64::EPSILON {
        0.5
    } else {
        (value - min) / range
    }
}
