/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A mutable slide in a presentation.
///
/// Slides are based on the Blank layout, so every piece of text lives in a
/// free-standing text box.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique within the presentation, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide background
    pub(crate) background: SlideBackground,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            background: SlideBackground::None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set a background for the slide.
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = background;
    }

    /// Get the background for the slide.
    pub fn background(&self) -> &SlideBackground {
        &self.background
    }

    /// Add an empty text box. Position and size are in EMU.
    ///
    /// Returns the new shape so its text frame can be filled in.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        // id 1 belongs to the shape tree itself
        let shape_id = self.shapes.len() as u32 + 2;
        self.shapes
            .push(MutableShape::new_text_box(shape_id, x, y, width, height));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Get the shapes on this slide.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on this slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Text of the first paragraph of the first shape, if any.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .first()
            .and_then(|s| s.text_frame().paragraphs().first())
            .map(|p| p.text())
    }

    /// Every paragraph on the slide, in shape order.
    pub fn text_lines(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .flat_map(|s| s.text_frame().paragraphs())
            .map(|p| p.text())
            .collect()
    }

    /// Generate slide XML content.
    ///
    /// The layout relationship is not referenced from the XML body, so the
    /// slide part can be generated before relationships are assigned.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        xml.push_str(&self.background.to_xml()?);

        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_shape_ids_start_after_tree() {
        let mut slide = MutableSlide::new(256);
        assert_eq!(slide.add_text_box(0, 0, 1, 1).shape_id(), 2);
        assert_eq!(slide.add_text_box(0, 0, 1, 1).shape_id(), 3);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_title_and_lines() {
        let mut slide = MutableSlide::new(256);
        assert_eq!(slide.title(), None);

        slide.add_text_box(0, 0, 1, 1).add_paragraph("Problem");
        let body = slide.add_text_box(0, 0, 1, 1);
        body.add_paragraph("• a");
        body.add_paragraph("• b");

        assert_eq!(slide.title(), Some("Problem"));
        assert_eq!(slide.text_lines(), ["Problem", "• a", "• b"]);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid(RGBColor::new(10, 10, 10)));
        slide.add_text_box(0, 0, 1, 1).add_paragraph("Thank you");

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains("<a:t>Thank you</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_no_background_element_by_default() {
        let slide = MutableSlide::new(256);
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.contains("<p:spTree>"));
    }
}
