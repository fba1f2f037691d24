//! # Layout Configuration
//!
//! All the geometry and branding knobs for one generation run, resolved
//! once and then owned immutably by the pagination engine. Lengths are in
//! PDF points (1/72 inch); the template itself was designed in centimeters,
//! so the constants below are expressed through [`CM`].
//!
//! Per-page card quotas are deliberately *not* stored here: they are derived
//! from the geometry (see `layout::page_capacity`), so the row step, header
//! heights, and quotas can never silently disagree.

use std::path::PathBuf;

use serde::Deserialize;

use crate::style::Color;

/// One centimeter in PDF points.
pub const CM: f64 = 72.0 / 2.54;

/// A4 page width in points.
pub const A4_WIDTH: f64 = 21.0 * CM;
/// A4 page height in points.
pub const A4_HEIGHT: f64 = 29.7 * CM;

/// Immutable configuration for one catalog generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Page dimensions in points.
    pub page_width: f64,
    pub page_height: f64,

    /// Cards per row.
    pub columns: usize,
    /// Card edge length (cards are square).
    pub card_size: f64,
    /// Horizontal gap between neighbouring cards.
    pub column_gap: f64,
    /// Vertical distance between the tops of consecutive card rows.
    pub row_step: f64,

    /// Vertical space reserved by the first-page header.
    pub first_header_height: f64,
    /// Vertical space reserved by the compact continuation header.
    pub continuation_header_height: f64,
    /// Extra margin between the continuation header and the first card row.
    /// The first page has none: its card grid starts flush under the header.
    pub continuation_top_margin: f64,

    /// Footer band dimensions. The band hugs the bottom-left page corner
    /// and is narrower than the page, so the bottom card row may extend
    /// beside (and slightly over) it.
    pub footer_width: f64,
    pub footer_height: f64,

    /// Category title, uppercased into the page headers.
    pub title: String,
    /// Accent color for header panel, footer band, and card triangles.
    pub accent: Color,
    /// Brand text drawn inside the logo block when no logo image is given.
    pub brand: String,
    /// Social handle centered in the footer band.
    pub footer_handle: String,
    /// Tagline in the black strip under the first-page header.
    pub tagline: String,

    /// Optional logo image for the header logo block.
    pub logo: Option<PathBuf>,
    /// Optional icon drawn next to the footer handle.
    pub footer_icon: Option<PathBuf>,
    /// Directory product image names are resolved against.
    pub image_dir: PathBuf,
    /// Product images larger than this (in either dimension, pixels) are
    /// downscaled before embedding.
    pub image_max_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            columns: 3,
            card_size: 6.0 * CM,
            column_gap: 0.5 * CM,
            row_step: 6.5 * CM,
            first_header_height: 8.3 * CM,
            continuation_header_height: 2.5 * CM,
            continuation_top_margin: 0.4 * CM,
            footer_width: 13.0 * CM,
            footer_height: 2.0 * CM,
            title: "CATALOGO".to_string(),
            accent: Color::rgb(0x63 as f64 / 255.0, 0xB7 as f64 / 255.0, 1.0),
            brand: "INSUMOSPARA:TODO".to_string(),
            footer_handle: "@insumosparatodo".to_string(),
            tagline: "Nuestra línea de productos disponibles".to_string(),
            logo: None,
            footer_icon: None,
            image_dir: PathBuf::from("imagenes"),
            image_max_px: 1024,
        }
    }
}

impl LayoutConfig {
    /// X origin of the given card column, with the whole grid centered on
    /// the page.
    pub fn column_x(&self, column: usize) -> f64 {
        let grid_width = self.columns as f64 * self.card_size
            + (self.columns.saturating_sub(1)) as f64 * self.column_gap;
        let left = (self.page_width - grid_width) / 2.0;
        left + column as f64 * (self.card_size + self.column_gap)
    }
}
