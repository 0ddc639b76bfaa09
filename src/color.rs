use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::LabelMaps;

// ---------------------------------------------------------------------------
// Continuous colour scale
// ---------------------------------------------------------------------------

/// Sample a continuous hue scale at `t` in `[0, 1]`.
pub fn scale_color(t: f32) -> Color32 {
    let hue = t.clamp(0.0, 1.0) * 300.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Technology colour encoding
// ---------------------------------------------------------------------------

// Technology codes span this fixed axis domain.
const CODE_DOMAIN: (f32, f32) = (1.0, 5.0);

/// Maps technology codes to line colours by positioning each code on the
/// continuous scale.
#[derive(Debug, Clone)]
pub struct TechnologyColors {
    mapping: BTreeMap<u8, Color32>,
    default_color: Color32,
}

impl TechnologyColors {
    /// Build the colour mapping for the technology codes present in the
    /// dataset.
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Self {
        let span = CODE_DOMAIN.1 - CODE_DOMAIN.0;
        let mapping = codes
            .into_iter()
            .map(|code| {
                let t = (f32::from(code) - CODE_DOMAIN.0) / span;
                (code, scale_color(t))
            })
            .collect();
        TechnologyColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a technology code; unmapped codes render grey.
    pub fn color_for(&self, code: u8) -> Color32 {
        self.mapping
            .get(&code)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (display name → colour) for the UI.
    pub fn legend_entries(&self, labels: &LabelMaps) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(code, color)| (labels.technology_name(*code), *color))
            .collect()
    }
}
