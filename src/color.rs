use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Species palette
// ---------------------------------------------------------------------------

/// Ten distinct colours, assigned in selection order.
const SPECIES_HEX: [&str; 10] = [
    "#1976d2", // blue
    "#d32f2f", // red
    "#388e3c", // green
    "#f57c00", // orange
    "#7b1fa2", // purple
    "#0288d1", // light blue
    "#c2185b", // pink
    "#5d4037", // brown
    "#455a64", // blue grey
    "#e64a19", // deep orange
];

fn hex_to_color32(hex: &str) -> Color32 {
    match hex.parse::<Srgb<u8>>() {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("Bad palette entry {hex}: {e}");
            Color32::GRAY
        }
    }
}

/// Colour for the `index`-th selected species.
pub fn species_color(index: usize) -> Color32 {
    hex_to_color32(SPECIES_HEX[index % SPECIES_HEX.len()])
}

/// `n` colours with evenly spaced hues at fixed saturation and lightness.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 360.0 * i as f32 / n as f32;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.45).into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

/// A lighter shade of `color`, used for marker fills behind trend lines.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let out: Srgb = hsl.lighten(amount).into_color();
    let out: Srgb<u8> = out.into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps the currently selected species to their display colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    /// Legend order follows the selection.
    order: Vec<String>,
}

impl ColorMap {
    /// Build a colour map from the ordered species selection.
    ///
    /// Selections that outgrow the fixed table switch to generated hues so
    /// every species stays distinguishable in the legend.
    pub fn new(selected: &[String]) -> Self {
        let colors: Vec<Color32> = if selected.len() <= SPECIES_HEX.len() {
            (0..selected.len()).map(species_color).collect()
        } else {
            generate_palette(selected.len())
        };
        let mapping = selected.iter().cloned().zip(colors).collect();
        ColorMap {
            mapping,
            order: selected.to_vec(),
        }
    }

    /// Look up the colour for a species; unselected species are grey.
    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping.get(species).copied().unwrap_or(Color32::GRAY)
    }

    /// Return the legend entries (species → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.order
            .iter()
            .map(|s| (s.clone(), self.color_for(s)))
            .collect()
    }
}
