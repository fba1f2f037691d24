//! # Page Layout and Pagination Engine
//!
//! Converts an ordered sequence of product records into pages of
//! absolutely-positioned drawing primitives. This module owns the
//! pagination state machine; the card template lives in [`card`] and the
//! decorative page chrome (headers, footer, logo block) in [`chrome`].
//!
//! Coordinates are top-left origin with y growing downward, in points.
//! The PDF serializer flips into PDF's bottom-up space at write time.
//!
//! ## Pagination
//!
//! One pass, one mutable [`PageCursor`]:
//!
//! 1. Page 1 opens with the rich first-page header.
//! 2. Each record becomes a card at `(column_x, cursor.y)`; the cursor
//!    advances column-first, descending one row step when a row fills.
//! 3. When a page has placed its card quota, the footer is emitted, the
//!    page is sealed, and the next page opens with the compact
//!    continuation header. No page ever reverts to the first-page header.
//! 4. The final page gets its footer too — every page carries exactly one.
//!
//! The per-page quota is *derived* from the geometry (`rows × columns`,
//! see [`page_capacity`]) instead of being configured separately, so the
//! quota can never drift out of sync with the row step or header heights.

pub mod card;
pub mod chrome;

use log::info;

use crate::config::LayoutConfig;
use crate::font::FontContext;
use crate::image_loader::LoadedImage;
use crate::model::ProductRecord;
use crate::style::{Color, FontStyle};

use chrome::ChromeAssets;

/// One finished page: a flat list of positioned drawing primitives.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

/// A positioned drawing primitive.
///
/// `(x, y)` is the top-left corner for rects and images, and the left end
/// of the baseline for text.
#[derive(Debug, Clone)]
pub struct Element {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub draw: DrawOp,
}

/// The visual vocabulary of the catalog template.
#[derive(Debug, Clone)]
pub enum DrawOp {
    /// A rectangle, optionally filled and/or stroked, with per-corner radii.
    Rect {
        fill: Option<Color>,
        stroke: Option<Color>,
        corner_radius: Corners,
    },
    /// A filled closed polygon (logo block, tagline tip, card triangles).
    Polygon { points: Vec<(f64, f64)>, fill: Color },
    /// A single text run.
    Text {
        content: String,
        style: FontStyle,
        size: f64,
        color: Color,
    },
    /// A decoded image drawn into the element's box.
    Image { image: LoadedImage },
}

/// Per-corner radii. The header panels round only their bottom-right
/// corner, so this can't be a single scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl Corners {
    pub fn none() -> Self {
        Self::default()
    }

    /// Round only the bottom-right corner — the header panel signature.
    pub fn bottom_right(radius: f64) -> Self {
        Self {
            bottom_right: radius,
            ..Self::default()
        }
    }
}

// ── Element constructors used by card and chrome layout ─────────────

pub(crate) fn filled_rect(x: f64, y: f64, w: f64, h: f64, fill: Color) -> Element {
    Element {
        x,
        y,
        width: w,
        height: h,
        draw: DrawOp::Rect {
            fill: Some(fill),
            stroke: None,
            corner_radius: Corners::none(),
        },
    }
}

pub(crate) fn stroked_rect(x: f64, y: f64, w: f64, h: f64, stroke: Color) -> Element {
    Element {
        x,
        y,
        width: w,
        height: h,
        draw: DrawOp::Rect {
            fill: None,
            stroke: Some(stroke),
            corner_radius: Corners::none(),
        },
    }
}

pub(crate) fn rounded_rect(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: Color,
    corner_radius: Corners,
) -> Element {
    Element {
        x,
        y,
        width: w,
        height: h,
        draw: DrawOp::Rect {
            fill: Some(fill),
            stroke: None,
            corner_radius,
        },
    }
}

pub(crate) fn polygon(points: Vec<(f64, f64)>, fill: Color) -> Element {
    let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    Element {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
        draw: DrawOp::Polygon { points, fill },
    }
}

/// A text run with its left baseline end at `(x, baseline_y)`.
pub(crate) fn text_left(
    x: f64,
    baseline_y: f64,
    content: impl Into<String>,
    style: FontStyle,
    size: f64,
    color: Color,
    fonts: &FontContext,
) -> Element {
    let content = content.into();
    let width = fonts.measure(&content, style, size);
    Element {
        x,
        y: baseline_y,
        width,
        height: size,
        draw: DrawOp::Text {
            content,
            style,
            size,
            color,
        },
    }
}

/// A text run horizontally centered on `center_x`.
pub(crate) fn text_centered(
    center_x: f64,
    baseline_y: f64,
    content: impl Into<String>,
    style: FontStyle,
    size: f64,
    color: Color,
    fonts: &FontContext,
) -> Element {
    let content = content.into();
    let width = fonts.measure(&content, style, size);
    Element {
        x: center_x - width / 2.0,
        y: baseline_y,
        width,
        height: size,
        draw: DrawOp::Text {
            content,
            style,
            size,
            color,
        },
    }
}

// ── Pagination state ─────────────────────────────────────────────────

/// Mutable pagination state. One instance per `paginate` call, discarded
/// afterwards — nothing leaks between runs.
#[derive(Debug)]
struct PageCursor {
    /// Current card column, `0..columns`.
    column: usize,
    /// Cards already placed on the current page.
    cards_on_page: usize,
    /// Derived card quota for the current page.
    page_limit: usize,
    /// Y of the current card row's top edge.
    y: f64,
}

impl PageCursor {
    /// Open a fresh page whose card grid starts at `content_top`.
    fn open(content_top: f64, cfg: &LayoutConfig) -> Self {
        Self {
            column: 0,
            cards_on_page: 0,
            page_limit: page_capacity(content_top, cfg),
            y: content_top,
        }
    }

    /// Advance past one placed card: next column, or next row when the
    /// row is full.
    fn advance(&mut self, cfg: &LayoutConfig) {
        self.column += 1;
        if self.column == cfg.columns {
            self.column = 0;
            self.y += cfg.row_step;
        }
        self.cards_on_page += 1;
    }

    fn page_full(&self) -> bool {
        self.cards_on_page >= self.page_limit
    }
}

/// How many cards fit on a page whose card grid starts at `content_top`.
///
/// A row fits as long as the full card stays on the page; the footer band
/// is narrow and hugs the bottom-left corner, so the bottom row is allowed
/// to stand beside it. With the default A4 geometry this derives 9 for the
/// first page (3 rows) and 12 for continuation pages (4 rows).
pub fn page_capacity(content_top: f64, cfg: &LayoutConfig) -> usize {
    let available = cfg.page_height - content_top;
    if available < cfg.card_size {
        return 0;
    }
    let rows = 1 + ((available - cfg.card_size) / cfg.row_step).floor() as usize;
    rows * cfg.columns
}

/// Lay out the whole catalog: one card per record, paginated into a
/// sequence of drawing-instruction pages.
///
/// Always produces at least one page; zero records yield a single page
/// with header and footer only. Card-level failures (missing photos,
/// empty descriptions) degrade inside the card and never abort the run.
pub fn paginate(
    records: &[ProductRecord],
    cfg: &LayoutConfig,
    fonts: &FontContext,
) -> Vec<Page> {
    let assets = ChromeAssets::load(cfg);

    let mut pages: Vec<Page> = Vec::new();
    let mut elements: Vec<Element> = Vec::new();

    let reserved = chrome::first_page_header(&mut elements, cfg, fonts, &assets);
    let mut cursor = PageCursor::open(reserved, cfg);

    for record in records {
        if cursor.page_full() {
            chrome::footer(&mut elements, cfg, fonts, &assets);
            pages.push(seal_page(&mut elements, cfg));

            let reserved = chrome::continuation_header(&mut elements, cfg, fonts, &assets);
            cursor = PageCursor::open(reserved + cfg.continuation_top_margin, cfg);
        }

        let origin = (cfg.column_x(cursor.column), cursor.y);
        card::layout_card(&mut elements, origin, record, cfg, fonts);
        cursor.advance(cfg);
    }

    chrome::footer(&mut elements, cfg, fonts, &assets);
    pages.push(seal_page(&mut elements, cfg));

    info!(
        "laid out {} product(s) across {} page(s)",
        records.len(),
        pages.len()
    );
    pages
}

fn seal_page(elements: &mut Vec<Element>, cfg: &LayoutConfig) -> Page {
    Page {
        width: cfg.page_width,
        height: cfg.page_height,
        elements: std::mem::take(elements),
    }
}
