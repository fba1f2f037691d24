//! # Colors and Font Styles
//!
//! The small visual vocabulary the catalog template needs: an RGB color
//! (accent, black, white) and a two-value logical font style. The accent
//! color is the single user-chosen color applied to the header panel, the
//! footer band, and the card corner triangles.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color. The leading `#` is optional.
    ///
    /// Anything that is not exactly six hex digits is rejected — the same
    /// validation the interactive front-end applies before a run starts.
    pub fn from_hex(hex: &str) -> Result<Self, CatalogError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CatalogError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0) as f64 / 255.0
        };
        Ok(Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }
}

/// The two logical font styles the catalog template uses.
///
/// The template never mixes families: everything renders in one sans face,
/// either regular or bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Bold,
}
