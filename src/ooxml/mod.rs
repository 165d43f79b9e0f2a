//! Office Open XML writer.
//!
//! `opc` is the packaging layer (parts, relationships, ZIP container) and
//! `pptx` the PresentationML document model built on top of it.

pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
