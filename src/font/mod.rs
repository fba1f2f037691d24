//! # Font Service
//!
//! Resolves the catalog's two logical styles to concrete PDF fonts and
//! measures rendered string widths.
//!
//! The template was designed for a branded sans with a Helvetica fallback;
//! we render the fallback directly. Both faces are standard PDF Type1
//! fonts, so no font data is embedded and the measurement tables ship with
//! the crate (see [`metrics`]).

pub mod metrics;

use crate::style::FontStyle;

/// The standard PDF fonts the catalog renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The /BaseFont name for the PDF font dictionary.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// Shared font context used by card layout, chrome drawing, and the PDF
/// serializer.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontContext;

impl FontContext {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a logical style to its concrete font.
    pub fn resolve(&self, style: FontStyle) -> StandardFont {
        match style {
            FontStyle::Regular => StandardFont::Helvetica,
            FontStyle::Bold => StandardFont::HelveticaBold,
        }
    }

    /// Width of a rendered string in points.
    pub fn measure(&self, text: &str, style: FontStyle, size: f64) -> f64 {
        let bold = matches!(style, FontStyle::Bold);
        let units: u32 = text.chars().map(|ch| metrics::advance(ch, bold) as u32).sum();
        units as f64 / 1000.0 * size
    }
}
