// SPDX-License-Identifier: MPL-2.0
//! Color tokens: ten-shade scales, the semantic usage table, per-color
//! guidance and the decorative palette.

use super::guidelines::Example;
use super::CatalogError;
use iced::Color;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of shades in every scale, lightest first.
pub const SHADES: usize = 10;

/// A named ten-shade color scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    name: String,
    hex: [String; SHADES],
    shades: [Color; SHADES],
}

impl ColorScale {
    /// Builds a scale from hex strings such as `#008EE2`.
    pub fn from_hex<S: AsRef<str>>(name: impl Into<String>, hex: &[S]) -> Result<Self, CatalogError> {
        let name = name.into();
        if hex.len() != SHADES {
            return Err(CatalogError::ScaleLength {
                name,
                count: hex.len(),
            });
        }

        let mut shades = [Color::BLACK; SHADES];
        for (slot, value) in shades.iter_mut().zip(hex) {
            *slot = parse_hex(value.as_ref())?;
        }
        let hex = std::array::from_fn(|i| hex[i].as_ref().to_uppercase());

        Ok(Self { name, hex, shades })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shade `index`, clamped to the darkest one.
    pub fn shade(&self, index: usize) -> Color {
        self.shades[index.min(SHADES - 1)]
    }

    pub fn hex(&self, index: usize) -> &str {
        &self.hex[index.min(SHADES - 1)]
    }

    pub fn shades(&self) -> &[Color; SHADES] {
        &self.shades
    }
}

/// Parses `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex(value: &str) -> Result<Color, CatalogError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(CatalogError::InvalidColor(value.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| CatalogError::InvalidColor(value.to_string()))
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// One row of the semantic usage table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorUsage {
    pub purpose: String,
    pub color: String,
    pub usage: String,
    pub example: String,
}

/// Guidance for one semantic color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwatchGuide {
    pub name: String,
    pub description: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// Guidance shown above the decorative scales.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DecorativeGuide {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawColors {
    #[serde(default)]
    decorative: Vec<String>,
    scales: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    usage: Vec<ColorUsage>,
    #[serde(default)]
    swatches: Vec<SwatchGuide>,
    #[serde(default)]
    decorative_guide: DecorativeGuide,
}

impl RawColors {
    pub(crate) fn into_catalog(self) -> Result<ColorCatalog, CatalogError> {
        let scales = self
            .scales
            .iter()
            .map(|(name, hex)| ColorScale::from_hex(name.clone(), hex.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = ColorCatalog {
            scales,
            decorative: self.decorative,
            usage: self.usage,
            swatches: self.swatches,
            decorative_guide: self.decorative_guide,
        };

        for name in &catalog.decorative {
            catalog.resolve(name)?;
        }
        for row in &catalog.usage {
            catalog.resolve(&row.color)?;
        }
        for swatch in &catalog.swatches {
            catalog.resolve(&swatch.name)?;
        }

        Ok(catalog)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorCatalog {
    scales: Vec<ColorScale>,
    decorative: Vec<String>,
    usage: Vec<ColorUsage>,
    swatches: Vec<SwatchGuide>,
    decorative_guide: DecorativeGuide,
}

impl ColorCatalog {
    pub fn scale(&self, name: &str) -> Option<&ColorScale> {
        self.scales.iter().find(|scale| scale.name == name)
    }

    /// Like [`Self::scale`], but reports unknown names as errors.
    pub fn resolve(&self, name: &str) -> Result<&ColorScale, CatalogError> {
        self.scale(name)
            .ok_or_else(|| CatalogError::UnknownColor(name.to_string()))
    }

    pub fn scales(&self) -> &[ColorScale] {
        &self.scales
    }

    /// Decorative scales in display order.
    pub fn decorative(&self) -> impl Iterator<Item = &ColorScale> + '_ {
        self.decorative.iter().filter_map(|name| self.scale(name))
    }

    pub fn usage(&self) -> &[ColorUsage] {
        &self.usage
    }

    pub fn swatches(&self) -> &[SwatchGuide] {
        &self.swatches
    }

    pub fn decorative_guide(&self) -> &DecorativeGuide {
        &self.decorative_guide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: [&str; SHADES] = [
        "#F8FCFF", "#CFEDFF", "#A8DFFF", "#86D2FF", "#65C6FF", "#48BBFF", "#2DB1FF", "#008EE2",
        "#0076BB", "#006BAA",
    ];

    #[test]
    fn hex_parsing_accepts_both_forms() {
        assert_eq!(parse_hex("#008EE2"), Ok(Color::from_rgb8(0x00, 0x8E, 0xE2)));
        assert_eq!(parse_hex("ffffff"), Ok(Color::WHITE));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for value in ["", "#FFF", "#GGGGGG", "#12345678", "#ÄÄÄÄ"] {
            assert!(parse_hex(value).is_err(), "{value}");
        }
    }

    #[test]
    fn scale_requires_ten_shades() {
        let err = ColorScale::from_hex("blue", &BLUE[..9]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ScaleLength {
                name: "blue".into(),
                count: 9
            }
        );
    }

    #[test]
    fn scale_exposes_shades_in_order() {
        let scale = ColorScale::from_hex("blue", &BLUE).expect("valid scale");
        assert_eq!(scale.name(), "blue");
        assert_eq!(scale.hex(7), "#008EE2");
        assert_eq!(scale.shade(0), Color::from_rgb8(0xF8, 0xFC, 0xFF));
        assert_eq!(scale.shade(42), scale.shade(9));
    }

    #[test]
    fn unknown_usage_color_is_rejected() {
        let raw: RawColors = toml::from_str(&format!(
            "[scales]\nblue = {BLUE:?}\n\n[[usage]]\npurpose = \"Caution\"\ncolor = \"orange\"\n\
             usage = \"Alerts\"\nexample = \"Clearing scores\"\n"
        ))
        .expect("parse colors");

        assert_eq!(
            raw.into_catalog().unwrap_err(),
            CatalogError::UnknownColor("orange".into())
        );
    }

    #[test]
    fn decorative_scales_keep_declared_order() {
        let raw: RawColors = toml::from_str(&format!(
            "decorative = [\"pink\", \"cyan\"]\n\n[scales]\ncyan = {BLUE:?}\npink = {BLUE:?}\n"
        ))
        .expect("parse colors");
        let catalog = raw.into_catalog().expect("valid colors");

        let names: Vec<_> = catalog.decorative().map(ColorScale::name).collect();
        assert_eq!(names, ["pink", "cyan"]);
    }
}
