//! Data model for Material Design theme exports.
//!
//! A [`Theme`] mirrors the JSON a Material theme builder produces: a seed
//! color, resolved light and dark schemes, named tonal palettes, and any
//! custom brand colors. Color values arrive either as ARGB integers or as
//! hex strings.

mod schema;
pub use schema::*;

mod deserializers;
