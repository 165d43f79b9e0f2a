//! Common types and utilities shared by the package and presentation layers.

pub mod color;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
