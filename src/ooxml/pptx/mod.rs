//! PowerPoint (.pptx) presentation writer.
//!
//! - [`MutablePresentation`]: the presentation being built
//! - [`MutableSlide`]: a slide, based on the Blank layout
//! - [`MutableShape`]: a text box holding a [`TextFrame`] of paragraphs
//! - [`package`]: turns a presentation into an OPC package
//!
//! ```rust,no_run
//! use launchpad_deck::common::RGBColor;
//! use launchpad_deck::common::unit::inches_to_emu;
//! use launchpad_deck::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let body = pres.add_slide().add_text_box(
//!     inches_to_emu(0.5),
//!     inches_to_emu(1.6),
//!     inches_to_emu(9.0),
//!     inches_to_emu(5.0),
//! );
//! for line in ["• first", "• second"] {
//!     body.add_paragraph(line)
//!         .font_size(18.0)
//!         .color(RGBColor::new(245, 245, 245))
//!         .space_after(8.0);
//! }
//! pres.save("bullets.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, ParagraphFormat, TextFormat};
pub use template::DocumentProperties;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, Paragraph, TextFrame};
