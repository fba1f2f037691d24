//! # Product Model
//!
//! One catalog entry per spreadsheet row. Records are built once at the
//! ingestion boundary and are immutable from there on; the card layout
//! engine consumes each record exactly once.

use std::path::PathBuf;

/// A single product row, fully normalized.
///
/// Every field defaults to the empty string when the source cell is missing
/// or blank — downstream code never sees a null. An empty `image` means the
/// row listed no photo at all, which renders differently from a listed photo
/// that fails to load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    /// Product code shown in the black strip at the card's top-left.
    pub code: String,
    /// Free-text description, wrapped to at most three lines on the card.
    pub description: String,
    /// Path to the product photo, already joined onto the image directory.
    /// Empty if the row had no image cell.
    pub image: PathBuf,
    /// Per-unit value (`UND:` column). Currency-formatted when numeric.
    pub unit: String,
    /// Per-bulk value (`BULTO:` column). Currency-formatted when numeric.
    pub bulk_unit: String,
    /// Sale unit (`UND.VENTA:` column). Always rendered verbatim.
    pub sale_unit: String,
}
