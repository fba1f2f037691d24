//! # Product Card Template
//!
//! One card per product: a 6×6 cm frame holding the code strip, the photo,
//! the wrapped description, a three-column unit table, and the accent
//! triangle in the bottom-right corner. All offsets are relative to the
//! card origin handed in by the pagination engine.
//!
//! Laying out a card never fails. A missing or broken photo becomes a
//! placeholder label, an empty description simply leaves its band blank,
//! and unparsable unit values render verbatim.

use log::warn;

use crate::config::{LayoutConfig, CM};
use crate::font::FontContext;
use crate::image_loader::{self, fit_box};
use crate::model::ProductRecord;
use crate::style::{Color, FontStyle};
use crate::text::fit_lines;

use super::{filled_rect, polygon, stroked_rect, text_centered, DrawOp, Element};

// Template constants, straight from the design (centimeters).
const CODE_STRIP_WIDTH: f64 = 3.8 * CM;
const CODE_STRIP_HEIGHT: f64 = 0.8 * CM;
/// The code strip overhangs the frame slightly on its top-left.
const CODE_STRIP_OVERHANG: f64 = 0.05 * CM;
const CODE_FONT_SIZE: f64 = 13.0;

const DESCRIPTION_TOP: f64 = 1.2 * CM;
const DESCRIPTION_INSET: f64 = 1.2 * CM;
const DESCRIPTION_FONT_SIZE: f64 = 9.0;
const DESCRIPTION_MAX_LINES: usize = 3;
/// Baseline-to-baseline distance as a fraction of the font size.
const LINE_SPACING: f64 = 0.9;

const IMAGE_BOX_LEFT: f64 = 0.5 * CM;
const IMAGE_BOX_TOP: f64 = 2.1 * CM;
const IMAGE_BOX_WIDTH: f64 = 5.0 * CM;
const IMAGE_BOX_HEIGHT: f64 = 2.5 * CM;
const PLACEHOLDER_FONT_SIZE: f64 = 7.0;
/// Placeholder when the listed photo can't be loaded.
const PLACEHOLDER_MISSING: &str = "[Imagen no encontrada]";
/// Placeholder when the row listed no photo at all.
const PLACEHOLDER_NONE: &str = "[Sin imagen]";

const TABLE_FONT_SIZE: f64 = 9.0;
/// Header baseline, up from the card's bottom edge.
const TABLE_HEADER_RISE: f64 = 0.5 * CM;
/// Value baseline sits this far below the header baseline.
const TABLE_VALUE_DROP: f64 = 0.4 * CM;

const TRIANGLE_SIZE: f64 = 0.6 * CM;

/// How a unit-table cell value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Numeric values become `{:.2}$`; anything else passes through.
    Currency,
    /// Always passed through unchanged.
    Verbatim,
}

/// The unit table's column policy: header, value accessor, formatter.
///
/// `UND.VENTA` staying verbatim while its siblings get currency formatting
/// is a deliberate asymmetry of the template ("12 unidades" must not
/// become a price), kept visible here instead of buried in formatting code.
pub const UNIT_COLUMNS: [(&str, fn(&ProductRecord) -> &str, CellFormat); 3] = [
    ("UND:", |r: &ProductRecord| r.unit.as_str(), CellFormat::Currency),
    ("BULTO:", |r: &ProductRecord| r.bulk_unit.as_str(), CellFormat::Currency),
    ("UND.VENTA:", |r: &ProductRecord| r.sale_unit.as_str(), CellFormat::Verbatim),
];

/// Render a cell value under the column's format policy.
pub fn format_cell(value: &str, format: CellFormat) -> String {
    match format {
        CellFormat::Currency => match value.trim().parse::<f64>() {
            Ok(v) => format!("{v:.2}$"),
            Err(_) => value.to_string(),
        },
        CellFormat::Verbatim => value.to_string(),
    }
}

/// The resolved sub-rectangles of one card, derived from its origin and
/// the fixed template constants. Recomputed per card; carries no identity.
#[derive(Debug, Clone, Copy)]
pub struct CardGeometry {
    pub origin: (f64, f64),
    pub size: f64,
    /// Code strip rect as (x, y, w, h).
    pub code_strip: (f64, f64, f64, f64),
    /// Image bounding box as (x, y, w, h).
    pub image_box: (f64, f64, f64, f64),
    /// Center x and first baseline y of the description block.
    pub description_anchor: (f64, f64),
    /// Width of one unit-table column.
    pub table_column_width: f64,
}

impl CardGeometry {
    pub fn from_origin(x: f64, y: f64, cfg: &LayoutConfig) -> Self {
        let size = cfg.card_size;
        Self {
            origin: (x, y),
            size,
            code_strip: (
                x - CODE_STRIP_OVERHANG,
                y - CODE_STRIP_OVERHANG,
                CODE_STRIP_WIDTH,
                CODE_STRIP_HEIGHT,
            ),
            image_box: (
                x + IMAGE_BOX_LEFT,
                y + IMAGE_BOX_TOP,
                IMAGE_BOX_WIDTH,
                IMAGE_BOX_HEIGHT,
            ),
            description_anchor: (x + size / 2.0, y + DESCRIPTION_TOP),
            table_column_width: size / UNIT_COLUMNS.len() as f64,
        }
    }
}

/// Lay out one product card with its top-left corner at `origin`.
///
/// Appends drawing primitives to `out`; infallible by contract — every
/// per-card failure degrades to placeholder content.
pub fn layout_card(
    out: &mut Vec<Element>,
    origin: (f64, f64),
    record: &ProductRecord,
    cfg: &LayoutConfig,
    fonts: &FontContext,
) {
    let geo = CardGeometry::from_origin(origin.0, origin.1, cfg);
    let (x, y) = geo.origin;

    // Frame.
    out.push(stroked_rect(x, y, geo.size, geo.size, Color::BLACK));

    // Code strip with the product code centered on it.
    let (sx, sy, sw, sh) = geo.code_strip;
    out.push(filled_rect(sx, sy, sw, sh, Color::BLACK));
    if !record.code.is_empty() {
        out.push(text_centered(
            sx + sw / 2.0,
            sy + sh - 0.25 * CM,
            &record.code,
            FontStyle::Bold,
            CODE_FONT_SIZE,
            Color::WHITE,
            fonts,
        ));
    }

    // Description, wrapped to at most three centered lines.
    let (desc_cx, desc_y) = geo.description_anchor;
    let lines = fit_lines(
        &record.description,
        geo.size - DESCRIPTION_INSET,
        FontStyle::Bold,
        DESCRIPTION_FONT_SIZE,
        DESCRIPTION_MAX_LINES,
        fonts,
    );
    if lines.is_empty() {
        warn!("product '{}' has no description", record.code);
    }
    for (i, line) in lines.iter().enumerate() {
        out.push(text_centered(
            desc_cx,
            desc_y + i as f64 * DESCRIPTION_FONT_SIZE * LINE_SPACING,
            line,
            FontStyle::Bold,
            DESCRIPTION_FONT_SIZE,
            Color::BLACK,
            fonts,
        ));
    }

    // Photo, aspect-fit into its box; placeholders on failure.
    layout_photo(out, &geo, record, cfg, fonts);

    // Unit table along the bottom. Columns with empty values are skipped
    // entirely (header included), keeping the fixed column grid.
    let header_y = y + geo.size - TABLE_HEADER_RISE;
    for (i, (header, value_of, format)) in UNIT_COLUMNS.iter().enumerate() {
        let value = value_of(record);
        if value.is_empty() {
            continue;
        }
        let center_x = x + (i as f64 + 0.5) * geo.table_column_width;
        out.push(text_centered(
            center_x,
            header_y,
            *header,
            FontStyle::Bold,
            TABLE_FONT_SIZE,
            Color::BLACK,
            fonts,
        ));
        out.push(text_centered(
            center_x,
            header_y + TABLE_VALUE_DROP,
            format_cell(value, *format),
            FontStyle::Bold,
            TABLE_FONT_SIZE,
            Color::BLACK,
            fonts,
        ));
    }

    // Accent triangle in the bottom-right corner.
    out.push(polygon(
        vec![
            (x + geo.size, y + geo.size),
            (x + geo.size - TRIANGLE_SIZE, y + geo.size),
            (x + geo.size, y + geo.size - TRIANGLE_SIZE),
        ],
        cfg.accent,
    ));
}

fn layout_photo(
    out: &mut Vec<Element>,
    geo: &CardGeometry,
    record: &ProductRecord,
    cfg: &LayoutConfig,
    fonts: &FontContext,
) {
    let (bx, by, bw, bh) = geo.image_box;
    let placeholder_baseline = geo.origin.1 + geo.size - 2.5 * CM;

    if record.image.as_os_str().is_empty() {
        out.push(text_centered(
            geo.origin.0 + geo.size / 2.0,
            placeholder_baseline,
            PLACEHOLDER_NONE,
            FontStyle::Regular,
            PLACEHOLDER_FONT_SIZE,
            Color::BLACK,
            fonts,
        ));
        return;
    }

    match image_loader::load(&record.image, cfg.image_max_px) {
        Ok(image) => {
            let fit = fit_box(image.width_px, image.height_px, bw, bh);
            out.push(Element {
                x: bx + fit.offset_x,
                y: by + fit.offset_y,
                width: fit.width,
                height: fit.height,
                draw: DrawOp::Image { image },
            });
        }
        Err(err) => {
            warn!("product '{}': {err}", record.code);
            out.push(text_centered(
                geo.origin.0 + geo.size / 2.0,
                placeholder_baseline,
                PLACEHOLDER_MISSING,
                FontStyle::Regular,
                PLACEHOLDER_FONT_SIZE,
                Color::BLACK,
                fonts,
            ));
        }
    }
}
