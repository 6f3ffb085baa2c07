use std::fmt;

use eframe::egui::Color32;
use indexmap::IndexMap;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

use crate::data::Dataset;

// ---------------------------------------------------------------------------
// Rgb – a series colour, serialised as `#rrggbb`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const GRAY: Rgb = Rgb([160, 160, 160]);

    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        let [r, g, b] = c.0;
        Color32::from_rgb(r, g, b)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Rgb([rgb.red, rgb.green, rgb.blue])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: categorical value → Rgb
// ---------------------------------------------------------------------------

/// Maps the distinct values of one column to distinct colours.
///
/// Built from the full dataset so a value keeps its colour no matter which
/// subset of rows is being charted.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: IndexMap<String, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let palette = generate_palette(values.len());
        ColorMap {
            mapping: values.into_iter().zip(palette).collect(),
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the colour for a value; unknown values get the default.
    pub fn color_for(&self, value: &str) -> Rgb {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

/// Colour maps for the two categorical axes the charts use.
#[derive(Debug, Clone)]
pub struct ChartColors {
    pub categories: ColorMap,
    pub regions: ColorMap,
}

impl ChartColors {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            categories: ColorMap::new(dataset.categories().iter().cloned()),
            regions: ColorMap::new(dataset.regions().iter().cloned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_values_fall_back_to_gray() {
        let map = ColorMap::new(["East", "West"]);
        assert_ne!(map.color_for("East"), map.color_for("West"));
        assert_eq!(map.color_for("North"), Rgb::GRAY);
    }

    #[test]
    fn serializes_as_hex() {
        let json = serde_json::to_string(&Rgb([255, 8, 16])).unwrap();
        assert_eq!(json, "\"#ff0810\"");
    }
}
