//! Greeting text layout: line splitting, font sizing and line placement

use snowfall_core::{Dimensions, GlyphConfig, Point2};

/// One line of text centred on a point in device pixels
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    pub center: Point2,
}

/// Placement of every line of a greeting on the off-screen canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub font_size: f32,
    pub font_weight: u16,
    pub lines: Vec<LineLayout>,
}

/// Split text on the configured separator into at most two display lines.
///
/// `"Merry Christmas to Alex"` becomes `["Merry Christmas", "to Alex"]`;
/// text without the separator stays on one line.
pub fn split_lines(text: &str, config: &GlyphConfig) -> Vec<String> {
    match text.split_once(config.separator.as_str()) {
        Some((head, tail)) => {
            let first = config
                .first_line
                .as_deref()
                .filter(|line| !line.is_empty())
                .unwrap_or(head);
            vec![first.to_string(), format!("{}{}", config.second_line_prefix, tail)]
        }
        None => vec![text.to_string()],
    }
}

impl TextLayout {
    pub fn compute(text: &str, dims: Dimensions, config: &GlyphConfig) -> Self {
        let width = dims.width as f32;
        let height = dims.height as f32;
        let font_size = (width / config.width_divisor).min(config.max_font_px) * config.scale;

        let center_x = width / 2.0 + width * config.x_offset;
        let center_y = height / 2.0 + height * config.y_offset;

        let lines = split_lines(text, config);
        let mid = (lines.len() as f32 - 1.0) / 2.0;
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| LineLayout {
                text,
                center: Point2::new(
                    center_x,
                    center_y + (i as f32 - mid) * font_size * config.line_spacing,
                ),
            })
            .collect();

        Self {
            font_size,
            font_weight: config.font_weight,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_greeting_on_separator() {
        let config = GlyphConfig::default();
        assert_eq!(
            split_lines("Merry Christmas to Alex", &config),
            vec!["Merry Christmas".to_string(), "to Alex".to_string()]
        );
    }

    #[test]
    fn single_line_without_separator() {
        let config = GlyphConfig::default();
        assert_eq!(split_lines("Hello", &config), vec!["Hello".to_string()]);
        // "to" without surrounding spaces is not the separator
        assert_eq!(split_lines("Toronto", &config).len(), 1);
    }

    #[test]
    fn only_first_separator_splits() {
        let config = GlyphConfig::default();
        assert_eq!(
            split_lines("Merry Christmas to Alex to Sam", &config),
            vec!["Merry Christmas".to_string(), "to Alex to Sam".to_string()]
        );
    }

    #[test]
    fn first_line_is_fixed_by_default() {
        let config = GlyphConfig::default();
        assert_eq!(
            split_lines("Happy Holidays to Sam", &config),
            vec!["Merry Christmas".to_string(), "to Sam".to_string()]
        );
    }

    #[test]
    fn empty_first_line_keeps_leading_text() {
        let config = GlyphConfig {
            first_line: Some(String::new()),
            ..GlyphConfig::default()
        };
        assert_eq!(
            split_lines("Happy Holidays to Sam", &config),
            vec!["Happy Holidays".to_string(), "to Sam".to_string()]
        );
        let unset = GlyphConfig {
            first_line: None,
            ..GlyphConfig::default()
        };
        assert_eq!(split_lines("Hi to Sam", &unset)[0], "Hi");
    }

    #[test]
    fn configured_separator_and_first_line() {
        let config = GlyphConfig {
            separator: " | ".to_string(),
            first_line: Some("Season's Greetings".to_string()),
            second_line_prefix: String::new(),
            ..GlyphConfig::default()
        };
        assert_eq!(
            split_lines("ignored | Robin", &config),
            vec!["Season's Greetings".to_string(), "Robin".to_string()]
        );
    }

    #[test]
    fn font_size_is_capped() {
        let config = GlyphConfig::default();
        let wide = TextLayout::compute("Hi", Dimensions::new(3000, 1000, 1.0), &config);
        assert!((wide.font_size - 60.0 * 1.72).abs() < 1e-3);
        let narrow = TextLayout::compute("Hi", Dimensions::new(400, 800, 1.0), &config);
        assert!((narrow.font_size - 50.0 * 1.72).abs() < 1e-3);
    }

    #[test]
    fn lines_are_centred_on_the_focal_point() {
        let config = GlyphConfig::default();
        let dims = Dimensions::new(1000, 800, 1.0);
        let layout = TextLayout::compute("Merry Christmas to Alex", dims, &config);
        assert_eq!(layout.lines.len(), 2);

        let cx = 500.0 + 1000.0 * 0.18;
        let cy = 400.0 + 800.0 * -0.22;
        let gap = layout.font_size * 1.4;
        assert!((layout.lines[0].center.x - cx).abs() < 1e-3);
        assert!((layout.lines[0].center.y - (cy - gap / 2.0)).abs() < 1e-3);
        assert!((layout.lines[1].center.y - (cy + gap / 2.0)).abs() < 1e-3);

        let single = TextLayout::compute("Hello", dims, &config);
        assert!((single.lines[0].center.y - cy).abs() < 1e-3);
    }
}
