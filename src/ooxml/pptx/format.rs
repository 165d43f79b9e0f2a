//! Text formatting types for PPTX shapes.

use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Character (run) formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Write the run properties as `<a:rPr>` (or the element named by `tag`,
    /// e.g. `a:endParaRPr`).
    pub(crate) fn write_run_properties(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(xml, r#"<{} lang="en-US""#, tag)?;

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = self.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        if let Some(italic) = self.italic {
            write!(xml, r#" i="{}""#, u8::from(italic))?;
        }
        if let Some(true) = self.underline {
            xml.push_str(r#" u="sng""#);
        }
        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = self.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }
        write!(xml, "</{}>", tag)?;

        Ok(())
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `algn` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Paragraph-level formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Horizontal alignment
    pub alignment: Option<Alignment>,
    /// Space after the paragraph in points
    pub space_after: Option<f64>,
}

impl ParagraphFormat {
    /// Whether any paragraph property is set.
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.space_after.is_none()
    }

    /// Write `<a:pPr>`; writes nothing when no property is set.
    pub(crate) fn write_paragraph_properties(&self, xml: &mut String) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        xml.push_str("<a:pPr");
        if let Some(alignment) = self.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_str())?;
        }

        match self.space_after {
            Some(pt) => write!(
                xml,
                r#"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
                pt_to_centipoints(pt)
            )?,
            None => xml.push_str("/>"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_properties() {
        let format = TextFormat {
            size: Some(36.0),
            bold: Some(true),
            color: Some(RGBColor::new(79, 255, 223)),
            ..Default::default()
        };
        let mut xml = String::new();
        format.write_run_properties(&mut xml, "a:rPr").unwrap();
        assert_eq!(
            xml,
            r#"<a:rPr lang="en-US" sz="3600" b="1" dirty="0"><a:solidFill><a:srgbClr val="4FFFDF"/></a:solidFill></a:rPr>"#
        );
    }

    #[test]
    fn test_empty_run_properties() {
        let mut xml = String::new();
        TextFormat::default()
            .write_run_properties(&mut xml, "a:endParaRPr")
            .unwrap();
        assert_eq!(xml, r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
    }

    #[test]
    fn test_font_is_escaped() {
        let format = TextFormat {
            font: Some("A&B".to_string()),
            ..Default::default()
        };
        let mut xml = String::new();
        format.write_run_properties(&mut xml, "a:rPr").unwrap();
        assert!(xml.contains(r#"<a:latin typeface="A&amp;B"/>"#));
    }

    #[test]
    fn test_paragraph_properties() {
        let mut xml = String::new();
        ParagraphFormat::default()
            .write_paragraph_properties(&mut xml)
            .unwrap();
        assert!(xml.is_empty());

        let format = ParagraphFormat {
            alignment: Some(Alignment::Center),
            space_after: Some(8.0),
        };
        format.write_paragraph_properties(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<a:pPr algn="ctr"><a:spcAft><a:spcPts val="800"/></a:spcAft></a:pPr>"#
        );
    }
}
