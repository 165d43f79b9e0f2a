/// Presentation writer for PPTX.
use crate::common::unit::inches_to_emu;
use crate::ooxml::error::Result;
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::package::build_package;
use crate::ooxml::pptx::template::DocumentProperties;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// Slide master id in `p:sldMasterIdLst`; must be at least 2^31.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// First id handed out to slides in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// # Examples
///
/// ```rust,no_run
/// use launchpad_deck::common::RGBColor;
/// use launchpad_deck::common::unit::inches_to_emu;
/// use launchpad_deck::ooxml::pptx::{MutablePresentation, SlideBackground};
///
/// let mut pres = MutablePresentation::new();
/// let slide = pres.add_slide();
/// slide.set_background(SlideBackground::solid(RGBColor::new(10, 10, 10)));
/// slide
///     .add_text_box(inches_to_emu(0.5), inches_to_emu(0.5), inches_to_emu(9.0), inches_to_emu(1.0))
///     .add_paragraph("Hello")
///     .font_size(36.0)
///     .bold(true);
/// pres.save("hello.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Core and extended document properties
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
            properties: DocumentProperties::default(),
        }
    }

    /// Add a new blank slide to the end of the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Get the document properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get the document properties for editing.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Serialize the presentation into `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = build_package(self)?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "presentation written");
        Ok(())
    }

    /// Write the presentation to a stream.
    pub fn save_to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master part
    /// * `slide_rel_ids` - Relationship ID of each slide part, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str(r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#);
        xml.push_str(r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#);
        xml.push_str(r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#);
        xml.push_str("</a:lvl1pPr>");
        xml.push_str("</p:defaultTextStyle>");

        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
