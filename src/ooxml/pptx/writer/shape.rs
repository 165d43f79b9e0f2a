/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{Alignment, ParagraphFormat, TextFormat};

/// One paragraph of a text frame, written as a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    /// Paragraph text
    pub(crate) text: String,
    /// Run formatting
    pub(crate) format: TextFormat,
    /// Paragraph formatting
    pub(crate) paragraph_format: ParagraphFormat,
}

impl Paragraph {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the run formatting.
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Get the paragraph formatting.
    pub fn paragraph_format(&self) -> &ParagraphFormat {
        &self.paragraph_format
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        self.format.font = Some(font.to_string());
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.format.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.format.color = Some(color);
        self
    }

    /// Builder method: set horizontal alignment.
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.paragraph_format.alignment = Some(alignment);
        self
    }

    /// Builder method: set the space after this paragraph in points.
    pub fn space_after(&mut self, pt: f64) -> &mut Self {
        self.paragraph_format.space_after = Some(pt);
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        self.paragraph_format.write_paragraph_properties(xml)?;

        if !self.text.is_empty() {
            xml.push_str("<a:r>");
            self.format.write_run_properties(xml, "a:rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }

        self.format.write_run_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text content of a text box: an ordered, never-empty list of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    /// Whether the initial paragraph has been given text
    first_claimed: bool,
    /// Wrap text at the shape boundary
    word_wrap: bool,
}

impl TextFrame {
    /// A frame with one empty paragraph.
    ///
    /// Text wraps at the box edge (`wrap="square"`) unless
    /// [`set_word_wrap`](Self::set_word_wrap) turns it off; PowerPoint's own
    /// text box tool writes `wrap="none"`.
    fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            first_claimed: false,
            word_wrap: true,
        }
    }

    /// Get the paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get a mutable reference to a paragraph by index.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    /// Set the text of the first paragraph, like typing into an empty box.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.first_claimed = true;
        let first = &mut self.paragraphs[0];
        first.text = text.into();
        first
    }

    /// Append a paragraph.
    ///
    /// The first call on a fresh frame fills the initial empty paragraph
    /// instead of adding a second one.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        if !self.first_claimed {
            return self.set_text(text);
        }
        self.paragraphs.push(Paragraph::new(text));
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Set whether text wraps at the shape boundary.
    pub fn set_word_wrap(&mut self, wrap: bool) {
        self.word_wrap = wrap;
    }

    /// All paragraph text joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        write!(
            xml,
            r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#,
            if self.word_wrap { "square" } else { "none" }
        )?;
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        text_frame: TextFrame,
    },
}

impl MutableShape {
    /// Create a new, empty text box shape. Geometry is in EMU.
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                x,
                y,
                width,
                height,
                text_frame: TextFrame::new(),
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the shape position and size in EMU as `(x, y, width, height)`.
    pub fn geometry(&self) -> (i64, i64, i64, i64) {
        match self.shape_type {
            ShapeType::TextBox {
                x, y, width, height, ..
            } => (x, y, width, height),
        }
    }

    /// Get the text frame.
    pub fn text_frame(&self) -> &TextFrame {
        match &self.shape_type {
            ShapeType::TextBox { text_frame, .. } => text_frame,
        }
    }

    /// Get the text frame for editing.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        match &mut self.shape_type {
            ShapeType::TextBox { text_frame, .. } => text_frame,
        }
    }

    /// Append a paragraph to this shape's text frame.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.text_frame_mut().add_paragraph(text)
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                x,
                y,
                width,
                height,
                text_frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                text_frame.to_xml(xml)?;

                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}
