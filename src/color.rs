use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Offset so two groups land on blue and orange.
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: diagnosis → Color32
// ---------------------------------------------------------------------------

/// Maps each diagnosis group to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Diagnosis, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        let palette = generate_palette(Diagnosis::ALL.len());
        let mapping = Diagnosis::ALL.into_iter().zip(palette).collect();
        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    /// Look up the colour for a diagnosis.
    pub fn color_for(&self, diagnosis: Diagnosis) -> Color32 {
        self.mapping
            .get(&diagnosis)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Same colour with `alpha` in [0, 1], for layered bars.
    pub fn translucent(&self, diagnosis: Diagnosis, alpha: f32) -> Color32 {
        self.color_for(diagnosis).gamma_multiply(alpha)
    }

    /// Return the legend entries (code → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(d, c)| (d.to_string(), *c))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Diverging scale
// ---------------------------------------------------------------------------

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

fn linear(rgb: (u8, u8, u8)) -> LinSrgb {
    Srgb::new(rgb.0, rgb.1, rgb.2).into_format::<f32>().into_linear()
}

/// Blue-white-red scale: `center` maps to neutral, `center ± span` to the
/// extremes. NaN maps to transparent.
pub fn coolwarm(value: f64, center: f64, span: f64) -> Color32 {
    if value.is_nan() {
        return Color32::TRANSPARENT;
    }
    let t = if span > 0.0 {
        ((value - center) / span).clamp(-1.0, 1.0) as f32
    } else {
        0.0
    };
    let neutral = linear(NEUTRAL);
    let mixed = if t < 0.0 {
        neutral.mix(linear(COOL), -t)
    } else {
        neutral.mix(linear(WARM), t)
    };
    to_color32(Srgb::from_linear(mixed))
}

/// Black or white, whichever reads better on `background`.
pub fn annotation_color(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_distinct() {
        let p = generate_palette(2);
        assert_eq!(p.len(), 2);
        assert_ne!(p[0], p[1]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_covers_both_groups() {
        let cm = ColorMap::default();
        assert_ne!(cm.color_for(Diagnosis::Malignant), cm.color_for(Diagnosis::Benign));
        let legend = cm.legend_entries();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].0, "0");
        assert_eq!(legend[1].0, "1");
    }

    #[test]
    fn test_coolwarm_ends_and_center() {
        let cold = coolwarm(-1.0, 0.0, 1.0);
        let hot = coolwarm(1.0, 0.0, 1.0);
        let mid = coolwarm(0.0, 0.0, 1.0);
        assert!(cold.b() > cold.r());
        assert!(hot.r() > hot.b());
        assert_eq!(mid, Color32::from_rgb(221, 221, 221));
        // Beyond the span clamps to the extremes.
        assert_eq!(coolwarm(5.0, 0.0, 1.0), hot);
        assert_eq!(coolwarm(f64::NAN, 0.0, 1.0), Color32::TRANSPARENT);
    }

    #[test]
    fn test_annotation_contrast() {
        assert_eq!(annotation_color(Color32::WHITE), Color32::BLACK);
        assert_eq!(annotation_color(Color32::from_rgb(59, 76, 192)), Color32::WHITE);
    }
}
