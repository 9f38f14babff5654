//! Advance widths of the built-in Helvetica faces
//!
//! Values are the AFM widths in thousandths of an em for the printable ASCII
//! range. Latin-1 accented letters measure as their base letter.

use crate::surface::{FontFace, TextMeasure};

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;

fn base_letter(ch: char) -> char {
    match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '¡' => '!',
        '¿' => '?',
        _ => ch,
    }
}

/// Width of one character in thousandths of an em
pub fn char_width(ch: char, font: FontFace) -> u16 {
    let table = match font {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    let code = base_letter(ch) as u32;
    if (32..127).contains(&code) {
        table[(code - 32) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Text measurement against the built-in Helvetica metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl TextMeasure for BuiltinMetrics {
    fn text_width(&self, text: &str, font: FontFace, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| char_width(ch, font) as u32).sum();
        units as f32 / 1000.0 * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(' ', FontFace::Regular), 278);
        assert_eq!(char_width('W', FontFace::Regular), 944);
        assert_eq!(char_width('i', FontFace::Regular), 222);
        assert_eq!(char_width('~', FontFace::Regular), 584);
        assert_eq!(char_width('i', FontFace::Bold), 278);
        assert_eq!(char_width('~', FontFace::Bold), 584);
    }

    #[test]
    fn test_accents_measure_as_base_letter() {
        assert_eq!(
            char_width('ñ', FontFace::Regular),
            char_width('n', FontFace::Regular)
        );
        assert_eq!(
            char_width('É', FontFace::Bold),
            char_width('E', FontFace::Bold)
        );
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let m = BuiltinMetrics;
        let w10 = m.text_width("El Gallo", FontFace::Regular, 10.0);
        let w20 = m.text_width("El Gallo", FontFace::Regular, 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
        assert_eq!(m.text_width("", FontFace::Regular, 10.0), 0.0);
    }
}
