//! Caption fitting
//!
//! Captions that are too wide lose characters from the end, one at a time,
//! until they fit or only [`MIN_CAPTION_CHARS`] remain. No ellipsis is added.

use crate::constants::MIN_CAPTION_CHARS;
use crate::surface::{DrawingSurface, TextMeasure, TextStyle};

/// A caption ready to draw: possibly trimmed text and its left edge
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub text: String,
    pub x: f32,
    pub width: f32,
}

/// Trim `text` from the end until it fits `max_width`.
pub fn fit_text(text: &str, measure: &impl TextMeasure, style: &TextStyle, max_width: f32) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let width = |chars: &[char]| {
        let s: String = chars.iter().collect();
        measure.text_width(&s, style.font, style.size)
    };

    while width(&chars) > max_width && chars.len() > MIN_CAPTION_CHARS {
        chars.pop();
    }

    chars.into_iter().collect()
}

/// Fit `text` to `max_width`, then centre it within `[x, x + available_width]`.
pub fn fit_centered(
    text: &str,
    measure: &impl TextMeasure,
    style: &TextStyle,
    x: f32,
    available_width: f32,
    max_width: f32,
) -> FittedText {
    let text = fit_text(text, measure, style, max_width);
    centered(text, measure, style, x, available_width)
}

/// Centre `text` unmodified within `[x, x + available_width]`.
pub fn centered(
    text: String,
    measure: &impl TextMeasure,
    style: &TextStyle,
    x: f32,
    available_width: f32,
) -> FittedText {
    let width = measure.text_width(&text, style.font, style.size);
    FittedText {
        x: x + (available_width - width) / 2.0,
        width,
        text,
    }
}

/// Draw a fitted caption at `baseline`
pub fn draw_fitted<S: DrawingSurface>(surface: &mut S, fitted: &FittedText, baseline: f32, style: &TextStyle) {
    surface.text(fitted.x, baseline, &fitted.text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BuiltinMetrics;
    use crate::surface::FontFace;

    fn style() -> TextStyle {
        TextStyle::new(FontFace::Regular, 10.5)
    }

    #[test]
    fn test_short_text_is_untouched_and_centered() {
        let m = BuiltinMetrics;
        let fitted = fit_centered("La Luna", &m, &style(), 100.0, 120.0, 110.0);
        assert_eq!(fitted.text, "La Luna");
        let width = m.text_width("La Luna", FontFace::Regular, 10.5);
        assert!((fitted.x - (100.0 + (120.0 - width) / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_long_text_is_trimmed_from_the_end() {
        let m = BuiltinMetrics;
        let name = "El Valiente de la Sierra Madre Occidental";
        let fitted = fit_text(name, &m, &style(), 60.0);

        assert!(name.starts_with(&fitted));
        assert!(fitted.len() < name.len());
        assert!(m.text_width(&fitted, FontFace::Regular, 10.5) <= 60.0);

        // One more character would not have fit
        let one_more: String = name.chars().take(fitted.chars().count() + 1).collect();
        assert!(m.text_width(&one_more, FontFace::Regular, 10.5) > 60.0);
        assert!(!fitted.ends_with('…'));
    }

    #[test]
    fn test_trim_stops_at_three_characters() {
        let m = BuiltinMetrics;
        let fitted = fit_text("WWWWWWWW", &m, &style(), 1.0);
        assert_eq!(fitted, "WWW");
    }

    #[test]
    fn test_short_wide_text_is_never_trimmed_below_minimum() {
        let m = BuiltinMetrics;
        assert_eq!(fit_text("WW", &m, &style(), 1.0), "WW");
    }

    #[test]
    fn test_trim_counts_characters_not_bytes() {
        let m = BuiltinMetrics;
        let fitted = fit_text("ñññññññññññññññ", &m, &style(), 1.0);
        assert_eq!(fitted, "ñññ");
    }

    #[test]
    fn test_fit_bound_holds() {
        let m = BuiltinMetrics;
        for name in ["El Gallo", "La Dama", "El Catrín", "Las Jaras del Indio", "El Negrito"] {
            for max in [5.0, 20.0, 40.0, 80.0, 200.0] {
                let fitted = fit_text(name, &m, &style(), max);
                let w = m.text_width(&fitted, FontFace::Regular, 10.5);
                assert!(w <= max || fitted.chars().count() == 3, "{name} @ {max}");
            }
        }
    }
}
