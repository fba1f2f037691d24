//! # Folleto
//!
//! A product-catalog PDF generator.
//!
//! Give it a spreadsheet of products — code, description, photo, unit
//! prices — and it lays the products out as branded cards on A4 pages and
//! writes the result straight to PDF bytes. The page template is fixed
//! (header, three-column card grid, footer band); everything brandable
//! about it comes from [`LayoutConfig`].
//!
//! ## Architecture
//!
//! ```text
//! Spreadsheet (CSV)
//!       ↓
//!   [ingest]   — Header matching, cell normalization → ProductRecord
//!       ↓
//!   [layout]   — Pagination engine + card template + page chrome
//!       ↓
//!   [pdf]      — Serialize to PDF bytes
//! ```
//!
//! The layout stage is deliberately tolerant: a missing product photo or a
//! non-numeric price degrades that one card and never aborts the run. Only
//! unreadable input, a missing required column, or bad configuration are
//! fatal.

pub mod config;
pub mod error;
pub mod font;
pub mod image_loader;
pub mod ingest;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod style;
pub mod text;

use std::path::Path;

use config::LayoutConfig;
use error::CatalogError;
use font::FontContext;
use model::ProductRecord;
use pdf::PdfWriter;

/// Generate a catalog PDF from already-loaded product records.
///
/// This is the primary entry point. One card per record, in record order.
pub fn generate(records: &[ProductRecord], cfg: &LayoutConfig) -> Vec<u8> {
    let fonts = FontContext::new();
    let pages = layout::paginate(records, cfg, &fonts);
    PdfWriter::new().write(&pages, &cfg.title, &fonts)
}

/// Read a product spreadsheet and generate the catalog PDF in one step.
pub fn generate_from_csv(path: &Path, cfg: &LayoutConfig) -> Result<Vec<u8>, CatalogError> {
    let records = ingest::load_records(path, &cfg.image_dir)?;
    Ok(generate(&records, cfg))
}
