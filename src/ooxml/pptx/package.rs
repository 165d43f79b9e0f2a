/// Assembly of a PowerPoint package from a [`MutablePresentation`].
///
/// Lays out every part a PresentationML package needs, wires up the
/// relationships between them, and hands back an [`OpcPackage`] ready for
/// [`PackageWriter`](crate::ooxml::opc::PackageWriter).
use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{BlobPart, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;

pub const PRESENTATION_PARTNAME: &str = "/ppt/presentation.xml";
pub const SLIDE_PARTNAME_TEMPLATE: &str = "/ppt/slides/slide%d.xml";
pub const SLIDE_MASTER_PARTNAME: &str = "/ppt/slideMasters/slideMaster1.xml";
pub const SLIDE_LAYOUT_PARTNAME: &str = "/ppt/slideLayouts/slideLayout7.xml";
pub const THEME_PARTNAME: &str = "/ppt/theme/theme1.xml";
pub const PRES_PROPS_PARTNAME: &str = "/ppt/presProps.xml";
pub const VIEW_PROPS_PARTNAME: &str = "/ppt/viewProps.xml";
pub const TABLE_STYLES_PARTNAME: &str = "/ppt/tableStyles.xml";
pub const CORE_PROPS_PARTNAME: &str = "/docProps/core.xml";
pub const APP_PROPS_PARTNAME: &str = "/docProps/app.xml";

fn uri(partname: &str) -> Result<PackURI> {
    Ok(PackURI::new(partname).map_err(OpcError::InvalidPackUri)?)
}

/// Build the OPC package for a presentation.
pub(crate) fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let master_uri = uri(SLIDE_MASTER_PARTNAME)?;
    let layout_uri = uri(SLIDE_LAYOUT_PARTNAME)?;
    let theme_uri = uri(THEME_PARTNAME)?;

    // Master -> layout must be rId1: the template's sldLayoutIdLst refers to it.
    let mut master = BlobPart::from_xml(
        master_uri.clone(),
        ct::PML_SLIDE_MASTER,
        template::default_slide_master_xml(),
    );
    master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
    master.relate_to(&theme_uri, rt::THEME);

    let mut layout = BlobPart::from_xml(
        layout_uri.clone(),
        ct::PML_SLIDE_LAYOUT,
        template::blank_slide_layout_xml(),
    );
    layout.relate_to(&master_uri, rt::SLIDE_MASTER);

    let theme = BlobPart::from_xml(theme_uri.clone(), ct::OFC_THEME, template::default_theme_xml());

    let mut slide_parts = Vec::with_capacity(pres.slide_count());
    for (index, slide) in pres.slides().iter().enumerate() {
        let slide_uri = PackURI::from_template(SLIDE_PARTNAME_TEMPLATE, index + 1)
            .map_err(OpcError::InvalidPackUri)?;
        let mut part = BlobPart::from_xml(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
        part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        tracing::debug!(slide = index + 1, shapes = slide.shape_count(), "slide part generated");
        slide_parts.push(part);
    }

    let pres_uri = uri(PRESENTATION_PARTNAME)?;
    let pres_props_uri = uri(PRES_PROPS_PARTNAME)?;
    let view_props_uri = uri(VIEW_PROPS_PARTNAME)?;
    let table_styles_uri = uri(TABLE_STYLES_PARTNAME)?;

    let mut pres_part = BlobPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
    let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
    let slide_rel_ids: Vec<String> = slide_parts
        .iter()
        .map(|part| pres_part.relate_to(part.partname(), rt::SLIDE))
        .collect();
    pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
    pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
    pres_part.relate_to(&theme_uri, rt::THEME);
    pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
    pres_part.set_blob(
        pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
            .into_bytes(),
    );

    let core_uri = uri(CORE_PROPS_PARTNAME)?;
    let app_uri = uri(APP_PROPS_PARTNAME)?;

    let mut package = OpcPackage::new();
    package.add_part(Box::new(pres_part))?;
    for part in slide_parts {
        package.add_part(Box::new(part))?;
    }
    package.add_part(Box::new(master))?;
    package.add_part(Box::new(layout))?;
    package.add_part(Box::new(theme))?;
    package.add_part(Box::new(BlobPart::from_xml(
        pres_props_uri,
        ct::PML_PRES_PROPS,
        template::default_pres_props_xml(),
    )))?;
    package.add_part(Box::new(BlobPart::from_xml(
        view_props_uri,
        ct::PML_VIEW_PROPS,
        template::default_view_props_xml(),
    )))?;
    package.add_part(Box::new(BlobPart::from_xml(
        table_styles_uri,
        ct::PML_TABLE_STYLES,
        template::default_table_styles_xml(),
    )))?;
    package.add_part(Box::new(BlobPart::from_xml(
        core_uri.clone(),
        ct::OPC_CORE_PROPERTIES,
        template::core_props_xml(pres.properties())?,
    )))?;
    package.add_part(Box::new(BlobPart::from_xml(
        app_uri.clone(),
        ct::OFC_EXTENDED_PROPERTIES,
        template::app_props_xml(pres.properties(), pres.slide_count())?,
    )))?;

    package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT)?;
    package.relate_to(&core_uri, rt::CORE_PROPERTIES)?;
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES)?;

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_text(package: &OpcPackage, partname: &str) -> String {
        let part = package.part(&PackURI::new(partname).unwrap()).unwrap();
        String::from_utf8(part.blob().to_vec()).unwrap()
    }

    #[test]
    fn test_package_layout() {
        let mut pres = MutablePresentation::new();
        pres.add_slide().add_text_box(0, 0, 10, 10).add_paragraph("One");
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        // presentation, 2 slides, master, layout, theme, 3 props parts, core, app
        assert_eq!(package.part_count(), 11);

        let pres_part = package.part(&uri(PRESENTATION_PARTNAME).unwrap()).unwrap();
        let rels = pres_part.rels();
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "slideMasters/slideMaster1.xml");
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "slides/slide1.xml");
        assert_eq!(rels.get("rId3").unwrap().target_ref(), "slides/slide2.xml");
        assert_eq!(rels.len(), 7);

        let xml = blob_text(&package, PRESENTATION_PARTNAME);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));

        assert!(blob_text(&package, "/ppt/slides/slide1.xml").contains("<a:t>One</a:t>"));
        assert!(blob_text(&package, APP_PROPS_PARTNAME).contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_master_and_layout_links() {
        let package = build_package(&MutablePresentation::new()).unwrap();

        let master = package.part(&uri(SLIDE_MASTER_PARTNAME).unwrap()).unwrap();
        let layout_rel = master.rels().get("rId1").unwrap();
        assert_eq!(layout_rel.reltype(), rt::SLIDE_LAYOUT);
        assert_eq!(layout_rel.target_ref(), "../slideLayouts/slideLayout7.xml");

        let layout = package.part(&uri(SLIDE_LAYOUT_PARTNAME).unwrap()).unwrap();
        assert_eq!(
            layout.rels().get("rId1").unwrap().target_ref(),
            "../slideMasters/slideMaster1.xml"
        );

        assert_eq!(package.rels().len(), 3);
        assert_eq!(
            package.rels().get("rId1").unwrap().target_ref(),
            "ppt/presentation.xml"
        );
    }
}
