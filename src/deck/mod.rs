//! The investor deck: literal slide content and how it maps onto the
//! presentation model.
//!
//! A [`Deck`] is plain data. [`Deck::build`] turns it into a
//! [`MutablePresentation`], one blank slide per [`SlideSpec`] with a solid
//! background and one text box per [`TextBlock`].

mod content;
pub mod style;

pub use content::{DECK_TITLE, OUTPUT_FILE_NAME, launchpad_deck};

use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::{MutablePresentation, SlideBackground};
use serde::Serialize;
use std::path::Path;
use style::{BODY, BODY_FRAME, Frame, SLIDE_TITLE, SUBTITLE, SUBTITLE_FRAME, TITLE_FRAME, TextStyle};

/// A positioned text box whose lines all share one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub frame: Frame,
    pub style: TextStyle,
    /// One paragraph per line
    pub lines: Vec<&'static str>,
}

impl TextBlock {
    pub fn new(frame: Frame, style: TextStyle, lines: &[&'static str]) -> Self {
        Self {
            frame,
            style,
            lines: lines.to_vec(),
        }
    }
}

/// One slide: a background color and text blocks in z-order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideSpec {
    pub background: RGBColor,
    pub blocks: Vec<TextBlock>,
}

impl SlideSpec {
    pub fn new(background: RGBColor, blocks: Vec<TextBlock>) -> Self {
        Self { background, blocks }
    }

    /// A content slide: accent title, optional bullet body, optional muted
    /// subtitle along the bottom edge. Empty body and subtitle get no box.
    pub fn standard(title: &'static str, body: &[&'static str], subtitle: Option<&'static str>) -> Self {
        let mut blocks = vec![TextBlock::new(TITLE_FRAME, SLIDE_TITLE, &[title])];
        if !body.is_empty() {
            blocks.push(TextBlock::new(BODY_FRAME, BODY, body));
        }
        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            blocks.push(TextBlock::new(SUBTITLE_FRAME, SUBTITLE, &[subtitle]));
        }
        Self::new(style::BACKGROUND, blocks)
    }

    /// First line of the first block.
    pub fn title(&self) -> Option<&'static str> {
        self.blocks.first().and_then(|b| b.lines.first()).copied()
    }

    /// Every line after the title, in block order.
    pub fn body_lines(&self) -> Vec<&'static str> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter().copied())
            .skip(1)
            .collect()
    }
}

/// Title and text of one slide, as printed by `--outline`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideOutline {
    pub number: usize,
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

/// An ordered list of slides plus the slide size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub title: &'static str,
    /// Slide width in inches
    pub width: f64,
    /// Slide height in inches
    pub height: f64,
    slides: Vec<SlideSpec>,
}

impl Deck {
    /// A 10" x 7.5" deck.
    pub fn new(title: &'static str, slides: Vec<SlideSpec>) -> Self {
        Self {
            title,
            width: 10.0,
            height: 7.5,
            slides,
        }
    }

    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide_titles(&self) -> Vec<&'static str> {
        self.slides.iter().filter_map(SlideSpec::title).collect()
    }

    pub fn outline(&self) -> Vec<SlideOutline> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| SlideOutline {
                number: i + 1,
                title: slide.title().unwrap_or_default(),
                lines: slide.body_lines(),
            })
            .collect()
    }

    /// Populate a presentation with this deck.
    pub fn build(&self) -> Result<MutablePresentation> {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(crate::common::unit::inches_to_emu(self.width));
        pres.set_slide_height(crate::common::unit::inches_to_emu(self.height));
        pres.properties_mut().title = Some(self.title.to_string());

        for spec in &self.slides {
            let slide = pres.add_slide();
            slide.set_background(SlideBackground::solid(spec.background));

            for block in &spec.blocks {
                let (x, y, cx, cy) = block.frame.to_emu();
                let shape = slide.add_text_box(x, y, cx, cy);
                for line in &block.lines {
                    let paragraph = shape.add_paragraph(*line);
                    paragraph
                        .font_size(block.style.size)
                        .color(block.style.color);
                    if block.style.bold {
                        paragraph.bold(true);
                    }
                    if let Some(pt) = block.style.space_after {
                        paragraph.space_after(pt);
                    }
                }
            }
        }

        tracing::debug!(slides = pres.slide_count(), "deck populated");
        Ok(pres)
    }

    /// Build the deck and write it to `path`, creating missing parent
    /// directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.build()?.save(path)?;
        tracing::info!(path = %path.display(), slides = self.len(), "deck saved");
        Ok(())
    }
}
