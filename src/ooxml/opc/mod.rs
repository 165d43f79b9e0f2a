//! Open Packaging Conventions (OPC) writer.
//!
//! An OPC package is a ZIP archive of parts, each with a content type, tied
//! together by relationship parts (`.rels`) and a `[Content_Types].xml`
//! manifest. This module provides the in-memory package model and the code
//! that serializes it.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
