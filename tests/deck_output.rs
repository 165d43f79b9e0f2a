//! End-to-end checks on the written `.pptx` package.

use launchpad_deck::common::xml::escape_xml;
use launchpad_deck::deck::{DECK_TITLE, OUTPUT_FILE_NAME, launchpad_deck};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

fn read_member(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut member = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing {name}: {e}"));
    let mut xml = String::new();
    member.read_to_string(&mut xml).unwrap();
    xml
}

fn open(path: &Path) -> ZipArchive<File> {
    ZipArchive::new(File::open(path).unwrap()).unwrap()
}

#[test]
fn test_save_writes_exactly_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);

    launchpad_deck().save(&path).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, [OUTPUT_FILE_NAME]);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("decks").join("deck.pptx");

    launchpad_deck().save(&path).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    std::fs::write(&path, b"stale").unwrap();

    launchpad_deck().save(&path).unwrap();
    // 14 fixed members plus each slide and its relationships
    assert_eq!(open(&path).len(), 14 + 2 * 12);
}

#[test]
fn test_package_has_twelve_slides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    launchpad_deck().save(&path).unwrap();

    let mut archive = open(&path);
    let mut slides: Vec<_> = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .map(str::to_string)
        .collect();
    slides.sort();
    assert_eq!(slides.len(), 12);
    for n in 1..=12 {
        assert!(slides.contains(&format!("ppt/slides/slide{n}.xml")));
    }

    let presentation = read_member(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 12);
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));

    let app = read_member(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>12</Slides>"));

    let core = read_member(&mut archive, "docProps/core.xml");
    assert!(core.contains(&format!("<dc:title>{DECK_TITLE}</dc:title>")));
}

#[test]
fn test_slide_text_matches_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    let deck = launchpad_deck();
    deck.save(&path).unwrap();

    let mut archive = open(&path);
    for (i, spec) in deck.slides().iter().enumerate() {
        let xml = read_member(&mut archive, &format!("ppt/slides/slide{}.xml", i + 1));

        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="0A0A0A"/>"#));
        assert_eq!(xml.matches(r#"txBox="1""#).count(), spec.blocks.len());

        let title = spec.title().unwrap();
        let mut offset = 0;
        for line in std::iter::once(title).chain(spec.body_lines()) {
            let run = format!("<a:t>{}</a:t>", escape_xml(line));
            let found = xml[offset..]
                .find(&run)
                .unwrap_or_else(|| panic!("slide {}: {line:?} missing or out of order", i + 1));
            offset += found + run.len();
        }
    }

    let promotion = read_member(&mut archive, "ppt/slides/slide7.xml");
    assert!(promotion.contains("SEO &amp; Content"));
}

#[test]
fn test_content_types_and_relationships() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    launchpad_deck().save(&path).unwrap();

    let mut archive = open(&path);
    let content_types = read_member(&mut archive, "[Content_Types].xml");
    assert!(content_types.contains(r#"<Default Extension="rels""#));
    assert!(content_types.contains(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#
    ));
    assert_eq!(
        content_types
            .matches("application/vnd.openxmlformats-officedocument.presentationml.slide+xml")
            .count(),
        12
    );

    let package_rels = read_member(&mut archive, "_rels/.rels");
    assert!(package_rels.contains(r#"Target="ppt/presentation.xml""#));

    let slide_rels = read_member(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
    assert!(slide_rels.contains(r#"Target="../slideLayouts/slideLayout7.xml""#));

    let master_rels = read_member(&mut archive, "ppt/slideMasters/_rels/slideMaster1.xml.rels");
    assert!(master_rels.contains(r#"Id="rId1""#));
    assert!(master_rels.contains("slideLayout7.xml"));
}

#[test]
fn test_outline_json() {
    let json = serde_json::to_value(launchpad_deck().outline()).unwrap();
    let slides = json.as_array().unwrap();
    assert_eq!(slides.len(), 12);
    assert_eq!(slides[1]["title"], "Problem");
    assert_eq!(slides[11]["title"], "Thank you");
    assert_eq!(slides[11]["lines"][0], "Launchpad — AI Event Generation");
}
