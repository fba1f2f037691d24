//! # Text Fitter
//!
//! Greedy word-wrap into a bounded number of lines, with ellipsis
//! truncation when the text doesn't fit. Pure: the only inputs are the
//! text, the bounds, and the font measurement capability — calling it twice
//! yields the same lines.
//!
//! The wrap is word-granular. A single word wider than the line keeps its
//! own line untruncated; only the final kept line of overflowing text gets
//! the ellipsis treatment.

use crate::font::FontContext;
use crate::style::FontStyle;

const ELLIPSIS: &str = "...";

/// Wrap `text` into at most `max_lines` lines of at most `max_width` points.
///
/// Returns an empty vec for empty/whitespace-only text. When the text needs
/// more than `max_lines` lines, the surplus words are dropped and the last
/// kept line is shortened until `line + "..."` fits, or down to a bare
/// `"..."` once fewer than four characters remain.
pub fn fit_lines(
    text: &str,
    max_width: f64,
    style: FontStyle,
    size: f64,
    max_lines: usize,
    fonts: &FontContext,
) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fonts.measure(&candidate, style, size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
            if lines.len() >= max_lines {
                // Quota flushed; the rest of the text is surplus.
                overflow = true;
                break;
            }
        }
    }

    if !current.is_empty() {
        if lines.len() < max_lines {
            lines.push(current);
        } else {
            overflow = true;
        }
    }

    if overflow {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = ellipsize(last, max_width, style, size, fonts);
        }
    }

    lines
}

/// Shorten `line` until `line + "..."` fits `max_width`.
fn ellipsize(
    line: &str,
    max_width: f64,
    style: FontStyle,
    size: f64,
    fonts: &FontContext,
) -> String {
    let mut kept: String = line.to_string();
    while fonts.measure(&format!("{kept}{ELLIPSIS}"), style, size) > max_width
        && kept.chars().count() > 3
    {
        kept.pop();
    }
    if kept.chars().count() > 3 {
        format!("{kept}{ELLIPSIS}")
    } else {
        ELLIPSIS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts() -> FontContext {
        FontContext::new()
    }

    #[test]
    fn test_empty_text_gives_no_lines() {
        assert!(fit_lines("", 100.0, FontStyle::Bold, 9.0, 3, &fonts()).is_empty());
        assert!(fit_lines("   ", 100.0, FontStyle::Bold, 9.0, 3, &fonts()).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = fit_lines("BOLSA 20x30", 200.0, FontStyle::Bold, 9.0, 3, &fonts());
        assert_eq!(lines, vec!["BOLSA 20x30"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let f = fonts();
        let text = "BOLSA PLASTICA TRANSPARENTE CALIBRE GRUESO";
        let lines = fit_lines(text, 90.0, FontStyle::Bold, 9.0, 5, &f);
        assert!(lines.len() > 1);
        // No kept line exceeds the bound (none here is a single over-wide word).
        for line in &lines {
            assert!(f.measure(line, FontStyle::Bold, 9.0) <= 90.0, "line too wide: {line}");
        }
        // Nothing was lost: rejoining gives the original text.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_never_exceeds_max_lines() {
        let text = "uno dos tres cuatro cinco seis siete ocho nueve diez";
        for max_lines in 1..4 {
            let lines = fit_lines(text, 40.0, FontStyle::Bold, 9.0, max_lines, &fonts());
            assert!(lines.len() <= max_lines);
        }
    }

    #[test]
    fn test_overflow_gets_ellipsis() {
        let f = fonts();
        let text = "BOLSA PLASTICA TRANSPARENTE CALIBRE GRUESO PARA ALIMENTOS CONGELADOS";
        let lines = fit_lines(text, 80.0, FontStyle::Bold, 9.0, 2, &f);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
        assert!(f.measure(&lines[1], FontStyle::Bold, 9.0) <= 80.0);
    }

    #[test]
    fn test_tiny_width_degrades_to_bare_ellipsis() {
        let lines = fit_lines("PALABRAS MUY LARGAS AQUI", 4.0, FontStyle::Bold, 9.0, 1, &fonts());
        assert_eq!(lines, vec!["..."]);
    }

    #[test]
    fn test_overwide_single_word_kept_whole() {
        let f = fonts();
        let lines = fit_lines("SUPERCALIFRAGILISTICO", 20.0, FontStyle::Bold, 9.0, 3, &f);
        assert_eq!(lines, vec!["SUPERCALIFRAGILISTICO"]);
        assert!(f.measure(&lines[0], FontStyle::Bold, 9.0) > 20.0);
    }

    #[test]
    fn test_pure_function_is_idempotent() {
        let f = fonts();
        let text = "BOLSA PLASTICA TRANSPARENTE CALIBRE GRUESO";
        let a = fit_lines(text, 90.0, FontStyle::Bold, 9.0, 3, &f);
        let b = fit_lines(text, 90.0, FontStyle::Bold, 9.0, 3, &f);
        assert_eq!(a, b);
    }
}
