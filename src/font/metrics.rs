//! Advance-width tables for the standard PDF fonts the catalog uses.
//!
//! Widths come from the Adobe AFM files for Helvetica and Helvetica-Bold,
//! in 1/1000 em units, covering the printable ASCII range. Accented Latin
//! letters (the catalog text is Spanish) are folded onto their base letter
//! for measurement — the real glyph widths differ by at most the accent
//! overhang, which is irrelevant at catalog font sizes.

/// Widths for ASCII 0x20..=0x7E, Helvetica, 1/1000 em.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Widths for ASCII 0x20..=0x7E, Helvetica-Bold, 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside the table (the Helvetica digit width).
const DEFAULT_WIDTH: u16 = 556;

/// Fold accented Latin-1 characters onto their base letter for width lookup.
fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        '¿' => '?',
        '¡' => '!',
        _ => ch,
    }
}

/// Advance width of one character in 1/1000 em.
pub fn advance(ch: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let ch = fold_accent(ch);
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) {
        table[(cp - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_width() {
        assert_eq!(advance(' ', false), 278);
        assert_eq!(advance(' ', true), 278);
    }

    #[test]
    fn test_bold_is_wider() {
        assert!(advance('a', true) > advance('a', false));
    }

    #[test]
    fn test_accent_folds_to_base() {
        assert_eq!(advance('á', false), advance('a', false));
        assert_eq!(advance('Ñ', true), advance('N', true));
    }

    #[test]
    fn test_unknown_char_gets_default() {
        assert_eq!(advance('€', false), DEFAULT_WIDTH);
    }
}
