//! Launchpad deck - builds the Launchpad investor pitch deck as a `.pptx` file
//!
//! The deck content is fixed and compiled into the crate. This library holds
//! the slide content and a small PresentationML writer that turns it into an
//! Office Open XML package.
//!
//! # Features
//!
//! - **Deck content**: the 12 slides, their text, colors and positions
//! - **PPTX writer**: slides with solid backgrounds and styled text boxes
//! - **OPC packaging**: parts, relationships and content types in a ZIP container
//!
//! # Example - Writing the deck
//!
//! ```no_run
//! use launchpad_deck::deck::{OUTPUT_FILE_NAME, launchpad_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = launchpad_deck();
//! deck.save(OUTPUT_FILE_NAME)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a presentation by hand
//!
//! ```no_run
//! use launchpad_deck::common::RGBColor;
//! use launchpad_deck::common::unit::inches_to_emu;
//! use launchpad_deck::ooxml::pptx::{MutablePresentation, SlideBackground};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::new(10, 10, 10)));
//! slide
//!     .add_text_box(inches_to_emu(0.5), inches_to_emu(0.5), inches_to_emu(9.0), inches_to_emu(1.0))
//!     .add_paragraph("Hello")
//!     .font_size(36.0)
//!     .bold(true);
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared primitives: colors, measurement units and XML escaping
pub mod common;

/// The Launchpad investor deck content
pub mod deck;

/// OOXML (Office Open XML) writer
///
/// This module provides the OPC packaging layer and the PresentationML
/// writer used to produce `.pptx` files.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::RGBColor;
pub use deck::{Deck, SlideSpec, TextBlock, launchpad_deck};
pub use ooxml::pptx::MutablePresentation;
pub use ooxml::{OoxmlError, Result};
