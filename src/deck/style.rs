//! Colors, type styles and text box frames used across the deck.

use crate::common::RGBColor;
use crate::common::unit::inches_to_emu;
use serde::Serialize;

/// Slide background.
pub const BACKGROUND: RGBColor = RGBColor::new(10, 10, 10);
/// Titles.
pub const ACCENT: RGBColor = RGBColor::new(79, 255, 223);
/// Body bullets.
pub const BODY_TEXT: RGBColor = RGBColor::new(245, 245, 245);
/// Subtitles and taglines.
pub const MUTED: RGBColor = RGBColor::new(136, 136, 136);

/// Character and paragraph style applied to every line of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub color: RGBColor,
    /// Space after each paragraph in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f64>,
}

impl TextStyle {
    const fn new(size: f64, bold: bool, color: RGBColor) -> Self {
        Self {
            size,
            bold,
            color,
            space_after: None,
        }
    }
}

pub const SLIDE_TITLE: TextStyle = TextStyle::new(36.0, true, ACCENT);
pub const BODY: TextStyle = TextStyle {
    space_after: Some(8.0),
    ..TextStyle::new(18.0, false, BODY_TEXT)
};
pub const SUBTITLE: TextStyle = TextStyle::new(14.0, false, MUTED);
pub const COVER_TITLE: TextStyle = TextStyle::new(54.0, true, ACCENT);
pub const CLOSING_TITLE: TextStyle = TextStyle::new(48.0, false, ACCENT);
pub const TAGLINE: TextStyle = TextStyle::new(20.0, false, MUTED);

/// Position and size of a text box, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The frame in EMU as `(x, y, width, height)`.
    pub fn to_emu(&self) -> (i64, i64, i64, i64) {
        (
            inches_to_emu(self.x),
            inches_to_emu(self.y),
            inches_to_emu(self.width),
            inches_to_emu(self.height),
        )
    }
}

pub const TITLE_FRAME: Frame = Frame::new(0.5, 0.5, 9.0, 1.0);
pub const BODY_FRAME: Frame = Frame::new(0.5, 1.6, 9.0, 5.0);
pub const SUBTITLE_FRAME: Frame = Frame::new(0.5, 6.5, 9.0, 0.8);
pub const COVER_TITLE_FRAME: Frame = Frame::new(1.0, 2.5, 8.0, 1.5);
pub const COVER_TAGLINE_FRAME: Frame = Frame::new(1.0, 4.2, 8.0, 0.8);
pub const CLOSING_TITLE_FRAME: Frame = Frame::new(2.0, 2.5, 6.0, 1.0);
pub const CLOSING_TAGLINE_FRAME: Frame = Frame::new(2.0, 4.0, 6.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_fit_on_slide() {
        for frame in [
            TITLE_FRAME,
            BODY_FRAME,
            SUBTITLE_FRAME,
            COVER_TITLE_FRAME,
            COVER_TAGLINE_FRAME,
            CLOSING_TITLE_FRAME,
            CLOSING_TAGLINE_FRAME,
        ] {
            assert!(frame.x + frame.width <= 10.0);
            assert!(frame.y + frame.height <= 7.5);
        }
    }

    #[test]
    fn test_frame_to_emu() {
        assert_eq!(TITLE_FRAME.to_emu(), (457_200, 457_200, 8_229_600, 914_400));
    }

    #[test]
    fn test_body_spacing() {
        assert_eq!(BODY.space_after, Some(8.0));
        assert_eq!(SLIDE_TITLE.space_after, None);
        assert!(!CLOSING_TITLE.bold);
    }
}
