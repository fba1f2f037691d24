//! # Page Chrome
//!
//! The decorative frame around the card grid: the rich first-page header,
//! the compact continuation header, the footer band, and the black logo
//! block with its pointed right edge. Pure cosmetic path drawing — every
//! rectangle is resolved here and handed to the drawing surface; no layout
//! decisions are made for the card grid beyond reporting the vertical
//! space each header consumes.

use log::warn;

use crate::config::{LayoutConfig, CM};
use crate::font::FontContext;
use crate::image_loader::{self, fit_box, LoadedImage};
use crate::style::{Color, FontStyle};

use super::{polygon, rounded_rect, text_centered, text_left, Corners, DrawOp, Element};

const FIRST_PANEL_LEFT: f64 = 1.3 * CM;
const FIRST_PANEL_WIDTH: f64 = 17.6 * CM;
const FIRST_PANEL_RADIUS: f64 = 25.0;
const FIRST_TITLE_SIZE: f64 = 40.0;
const FIRST_CATEGORY_SIZE: f64 = 64.0;

const TAGLINE_WIDTH: f64 = 11.5 * CM;
const TAGLINE_HEIGHT: f64 = 0.9 * CM;
const TAGLINE_TIP: f64 = 0.25 * CM;
const TAGLINE_FONT_SIZE: f64 = 13.0;

const NEXT_PANEL_LEFT: f64 = 1.8 * CM;
const NEXT_PANEL_RIGHT_MARGIN: f64 = 4.0 * CM;
const NEXT_PANEL_RADIUS: f64 = 20.0;
const NEXT_CATEGORY_SIZE: f64 = 45.0;

const FOOTER_ICON_SIZE: f64 = 1.2 * CM;
const FOOTER_GAP: f64 = 0.5 * CM;
const FOOTER_FONT_SIZE: f64 = 14.0;

/// Images the chrome draws on every page, loaded once per run.
///
/// Both are optional with text fallbacks, so a missing logo file can never
/// stop a catalog run.
#[derive(Debug, Default)]
pub struct ChromeAssets {
    pub logo: Option<LoadedImage>,
    pub footer_icon: Option<LoadedImage>,
}

impl ChromeAssets {
    pub fn load(cfg: &LayoutConfig) -> Self {
        let load_optional = |path: &Option<std::path::PathBuf>, what: &str| {
            path.as_ref().and_then(|p| {
                image_loader::load(p, 512)
                    .map_err(|err| warn!("{what} unavailable: {err}"))
                    .ok()
            })
        };
        Self {
            logo: load_optional(&cfg.logo, "logo"),
            footer_icon: load_optional(&cfg.footer_icon, "footer icon"),
        }
    }
}

/// Draw the rich first-page header. Returns the vertical space it reserves.
pub fn first_page_header(
    out: &mut Vec<Element>,
    cfg: &LayoutConfig,
    fonts: &FontContext,
    assets: &ChromeAssets,
) -> f64 {
    let panel_h = cfg.first_header_height;

    // Accent panel, rounded only at its bottom-right corner.
    out.push(rounded_rect(
        FIRST_PANEL_LEFT,
        0.0,
        FIRST_PANEL_WIDTH,
        panel_h,
        cfg.accent,
        Corners::bottom_right(FIRST_PANEL_RADIUS),
    ));

    // Black logo block pinned to the page's top-left.
    let block_h = panel_h * 0.6;
    let block_top = panel_h - 3.0 * CM - block_h;
    logo_block(out, block_top, block_h, block_h * 1.2, 0.8, fonts, assets, &cfg.brand);

    // Title pair, centered on the panel.
    let panel_cx = FIRST_PANEL_LEFT + FIRST_PANEL_WIDTH / 2.0;
    out.push(text_centered(
        panel_cx + 0.5 * CM,
        panel_h / 2.0 - 1.8 * CM,
        "CATÁLOGO",
        FontStyle::Bold,
        FIRST_TITLE_SIZE,
        Color::WHITE,
        fonts,
    ));
    out.push(text_centered(
        panel_cx + 0.25 * CM,
        panel_h / 2.0 + 0.9 * CM,
        cfg.title.to_uppercase(),
        FontStyle::Bold,
        FIRST_CATEGORY_SIZE,
        Color::WHITE,
        fonts,
    ));

    // Black tagline strip along the panel's bottom edge, with a subtle
    // pointed tip on its right.
    let strip_top = panel_h - TAGLINE_HEIGHT;
    out.push(polygon(
        vec![
            (FIRST_PANEL_LEFT, strip_top),
            (FIRST_PANEL_LEFT + TAGLINE_WIDTH, strip_top),
            (
                FIRST_PANEL_LEFT + TAGLINE_WIDTH + TAGLINE_TIP,
                strip_top + TAGLINE_HEIGHT / 2.0,
            ),
            (FIRST_PANEL_LEFT + TAGLINE_WIDTH, strip_top + TAGLINE_HEIGHT),
            (FIRST_PANEL_LEFT, strip_top + TAGLINE_HEIGHT),
        ],
        Color::BLACK,
    ));
    out.push(text_left(
        FIRST_PANEL_LEFT + 0.25 * CM,
        panel_h - 0.28 * CM,
        &cfg.tagline,
        FontStyle::Bold,
        TAGLINE_FONT_SIZE,
        Color::WHITE,
        fonts,
    ));

    panel_h
}

/// Draw the compact continuation header used on every page after the
/// first. Returns the vertical space it reserves.
pub fn continuation_header(
    out: &mut Vec<Element>,
    cfg: &LayoutConfig,
    fonts: &FontContext,
    assets: &ChromeAssets,
) -> f64 {
    let panel_h = cfg.continuation_header_height;

    out.push(rounded_rect(
        NEXT_PANEL_LEFT,
        0.0,
        cfg.page_width - NEXT_PANEL_RIGHT_MARGIN,
        panel_h,
        cfg.accent,
        Corners::bottom_right(NEXT_PANEL_RADIUS),
    ));

    // Wider logo block with a softer tip than the first page's.
    logo_block(out, 0.0, panel_h, panel_h * 2.7, 0.85, fonts, assets, &cfg.brand);

    out.push(text_centered(
        cfg.page_width / 2.0,
        panel_h / 2.0 + 15.0,
        cfg.title.to_uppercase(),
        FontStyle::Bold,
        NEXT_CATEGORY_SIZE,
        Color::WHITE,
        fonts,
    ));

    panel_h
}

/// Draw the footer band hugging the bottom-left page corner: accent
/// background with the icon + handle group centered as a unit.
pub fn footer(
    out: &mut Vec<Element>,
    cfg: &LayoutConfig,
    fonts: &FontContext,
    assets: &ChromeAssets,
) {
    let band_top = cfg.page_height - cfg.footer_height;
    out.push(super::filled_rect(
        0.0,
        band_top,
        cfg.footer_width,
        cfg.footer_height,
        cfg.accent,
    ));

    let text_w = fonts.measure(&cfg.footer_handle, FontStyle::Bold, FOOTER_FONT_SIZE);
    let total_w = FOOTER_ICON_SIZE + FOOTER_GAP + text_w;
    let start_x = (cfg.footer_width - total_w) / 2.0;

    match &assets.footer_icon {
        Some(icon) => {
            let fit = fit_box(icon.width_px, icon.height_px, FOOTER_ICON_SIZE, FOOTER_ICON_SIZE);
            let icon_top = band_top + (cfg.footer_height - FOOTER_ICON_SIZE) / 2.0;
            out.push(Element {
                x: start_x + fit.offset_x,
                y: icon_top + fit.offset_y,
                width: fit.width,
                height: fit.height,
                draw: DrawOp::Image {
                    image: icon.clone(),
                },
            });
        }
        None => {
            out.push(text_left(
                start_x,
                cfg.page_height - 0.7 * CM,
                "[IG]",
                FontStyle::Bold,
                10.0,
                Color::WHITE,
                fonts,
            ));
        }
    }

    out.push(text_left(
        start_x + FOOTER_ICON_SIZE + FOOTER_GAP,
        cfg.page_height - (cfg.footer_height / 2.0 - 0.35 * CM),
        &cfg.footer_handle,
        FontStyle::Bold,
        FOOTER_FONT_SIZE,
        Color::WHITE,
        fonts,
    ));
}

/// The black brand block with a pointed right edge. `tip_start` controls
/// how far along the block the point begins (the continuation header uses
/// a softer tip).
#[allow(clippy::too_many_arguments)]
fn logo_block(
    out: &mut Vec<Element>,
    top: f64,
    height: f64,
    width: f64,
    tip_start: f64,
    fonts: &FontContext,
    assets: &ChromeAssets,
    brand: &str,
) {
    let tip_x = if tip_start >= 0.85 { width * 0.95 } else { width };
    out.push(polygon(
        vec![
            (0.0, top),
            (width * tip_start, top),
            (tip_x, top + height / 2.0),
            (width * tip_start, top + height),
            (0.0, top + height),
        ],
        Color::BLACK,
    ));

    let inset = 0.15 * CM;
    let inner = (inset, top + inset, width * tip_start - 2.0 * inset, height - 2.0 * inset);

    match &assets.logo {
        Some(logo) => {
            let fit = fit_box(logo.width_px, logo.height_px, inner.2, inner.3);
            out.push(Element {
                x: inner.0 + fit.offset_x,
                y: inner.1 + fit.offset_y,
                width: fit.width,
                height: fit.height,
                draw: DrawOp::Image {
                    image: logo.clone(),
                },
            });
        }
        None => {
            // Brand text fallback, shrunk until it fits the block.
            let mut size = 12.0;
            while fonts.measure(brand, FontStyle::Bold, size) > inner.2 - 4.0 && size > 6.0 {
                size -= 1.0;
            }
            out.push(text_centered(
                inner.0 + inner.2 / 2.0,
                inner.1 + inner.3 / 2.0 + size * 0.35,
                brand,
                FontStyle::Bold,
                size,
                Color::WHITE,
                fonts,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LayoutConfig {
        LayoutConfig {
            title: "bolsas".to_string(),
            ..LayoutConfig::default()
        }
    }

    fn texts(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|e| match &e.draw {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_header_reserves_configured_height() {
        let mut out = Vec::new();
        let cfg = cfg();
        let reserved =
            first_page_header(&mut out, &cfg, &FontContext::new(), &ChromeAssets::default());
        assert!((reserved - cfg.first_header_height).abs() < 1e-9);
    }

    #[test]
    fn test_first_header_titles_and_tagline() {
        let mut out = Vec::new();
        let cfg = cfg();
        first_page_header(&mut out, &cfg, &FontContext::new(), &ChromeAssets::default());
        let texts = texts(&out);
        assert!(texts.contains(&"CATÁLOGO"));
        assert!(texts.contains(&"BOLSAS"), "title must be uppercased");
        assert!(texts.contains(&cfg.tagline.as_str()));
    }

    #[test]
    fn test_continuation_header_is_compact() {
        let mut out = Vec::new();
        let cfg = cfg();
        let reserved =
            continuation_header(&mut out, &cfg, &FontContext::new(), &ChromeAssets::default());
        assert!((reserved - cfg.continuation_header_height).abs() < 1e-9);
        assert!(reserved < cfg.first_header_height);
        let texts = texts(&out);
        assert!(texts.contains(&"BOLSAS"));
        assert!(!texts.contains(&"CATÁLOGO"));
    }

    #[test]
    fn test_headers_round_only_bottom_right() {
        let mut out = Vec::new();
        let cfg = cfg();
        first_page_header(&mut out, &cfg, &FontContext::new(), &ChromeAssets::default());
        let panel = &out[0];
        match &panel.draw {
            DrawOp::Rect { corner_radius, .. } => {
                assert!(corner_radius.bottom_right > 0.0);
                assert_eq!(corner_radius.top_left, 0.0);
                assert_eq!(corner_radius.top_right, 0.0);
                assert_eq!(corner_radius.bottom_left, 0.0);
            }
            other => panic!("first element should be the panel, got {other:?}"),
        }
    }

    #[test]
    fn test_footer_band_and_fallback_icon() {
        let mut out = Vec::new();
        let cfg = cfg();
        footer(&mut out, &cfg, &FontContext::new(), &ChromeAssets::default());
        let band = &out[0];
        assert_eq!(band.x, 0.0);
        assert!((band.y - (cfg.page_height - cfg.footer_height)).abs() < 1e-9);
        let texts = texts(&out);
        assert!(texts.contains(&cfg.footer_handle.as_str()));
        assert!(texts.contains(&"[IG]"), "no icon file means text fallback");
    }

    #[test]
    fn test_brand_fallback_shrinks_to_fit() {
        let mut out = Vec::new();
        let fonts = FontContext::new();
        let assets = ChromeAssets::default();
        logo_block(&mut out, 0.0, 40.0, 48.0, 0.8, &fonts, &assets, "INSUMOSPARA:TODO");
        let brand = out
            .iter()
            .find_map(|e| match &e.draw {
                DrawOp::Text { content, size, .. } if content == "INSUMOSPARA:TODO" => Some(*size),
                _ => None,
            })
            .expect("brand text fallback present");
        assert!(brand < 12.0, "long brand in a narrow block must shrink");
    }
}
