//! Slide backgrounds.

use crate::common::RGBColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Slide background configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// No slide-level background; the master background shows through
    #[default]
    None,
    /// Solid color background
    Solid {
        /// Fill color
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launchpad_deck::common::RGBColor;
    /// use launchpad_deck::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid(RGBColor::new(10, 10, 10));
    /// ```
    pub fn solid(color: RGBColor) -> Self {
        SlideBackground::Solid { color }
    }

    /// Generate the `<p:bg>` element. Must precede `<p:spTree>` inside `<p:cSld>`.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(128);

        match self {
            SlideBackground::None => {},
            SlideBackground::Solid { color } => {
                xml.push_str("<p:bg>");
                xml.push_str("<p:bgPr>");
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )?;
                xml.push_str("<a:effectLst/>");
                xml.push_str("</p:bgPr>");
                xml.push_str("</p:bg>");
            },
        }

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let bg = SlideBackground::solid(RGBColor::new(10, 10, 10));
        let xml = bg.to_xml().unwrap();
        assert!(xml.starts_with("<p:bg><p:bgPr>"));
        assert!(xml.contains(r#"<a:srgbClr val="0A0A0A"/>"#));
        assert!(xml.contains("<a:effectLst/>"));
    }

    #[test]
    fn test_no_background_xml() {
        assert_eq!(SlideBackground::None.to_xml().unwrap(), "");
        assert_eq!(SlideBackground::default(), SlideBackground::None);
    }
}
