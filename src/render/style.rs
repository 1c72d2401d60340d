//! Stroke styling shared by every outline in one render call.

use crate::error::ReviewError;

/// How review outlines are stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Line width in pixels. Zero draws nothing.
    pub width: u32,

    /// Opaque RGB colour.
    pub color: [u8; 3],
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 2,
            color: [255, 0, 0],
        }
    }
}

/// Parses an `rrggbb` colour, with or without a leading `#`.
pub fn parse_color(s: &str) -> Result<[u8; 3], ReviewError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ReviewError::InvalidArgument(format!(
            "colour '{}' is not of the form rrggbb",
            s
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| {
            ReviewError::InvalidArgument(format!("colour '{}' is not valid hex", s))
        })
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_pixel_red() {
        let style = StrokeStyle::default();
        assert_eq!(style.width, 2);
        assert_eq!(style.color, [255, 0, 0]);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff0000").unwrap(), [255, 0, 0]);
        assert_eq!(parse_color("00Ff7f").unwrap(), [0, 255, 127]);
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(parse_color("red").is_err());
        assert!(parse_color("#ff00").is_err());
        assert!(parse_color("gg0000").is_err());
        assert!(parse_color("ff00é").is_err());
    }
}
