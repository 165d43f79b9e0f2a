//! XML text helpers shared by the package and presentation writers.

mod escape;

pub use escape::escape_xml;
