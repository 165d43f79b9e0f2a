//! Presentation part templates.
//!
//! The fixed parts every new presentation needs: one slide master, the Blank
//! slide layout, a theme, and the presentation/view/table-style property
//! parts. Document properties are generated because they carry the title and
//! slide count.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Slide master with an empty shape tree and default text styles.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// The Blank slide layout (no placeholders).
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout7.xml")
}

/// Office theme with color, font and format schemes.
pub fn default_theme_xml() -> &'static str {
    include_str!("../../../resources/theme/theme1.xml")
}

/// Empty presentation properties.
pub fn default_pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}

/// Normal view properties.
pub fn default_view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

/// Table style list pointing at the default medium style.
pub fn default_table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

/// Metadata written into `docProps/core.xml` and `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub application: String,
}

impl Default for DocumentProperties {
    fn default() -> Self {
        Self {
            title: None,
            creator: None,
            application: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// Generate core properties (`docProps/core.xml`).
pub fn core_props_xml(props: &DocumentProperties) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    if let Some(ref title) = props.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(ref creator) = props.creator {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate extended properties (`docProps/app.xml`).
pub fn app_props_xml(props: &DocumentProperties, slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    write!(
        xml,
        "<Application>{}</Application>",
        escape_xml(&props.application)
    )?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");
    Ok(xml)
}
