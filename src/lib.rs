//! Flattens Material Design theme exports into CSS custom properties.
//!
//! A theme export (light/dark schemes, tonal palettes, custom brand
//! colors) turns into insertion-ordered maps of `--token: value` pairs,
//! plain stylesheet text, and a Tailwind preset wired to the same
//! variables.
//!
//! ```
//! use material_tokens::{FlattenConfig, Theme, css_text, properties_from_theme};
//!
//! let theme = Theme::baseline();
//! let maps = properties_from_theme(theme, &FlattenConfig::new())?;
//!
//! assert_eq!(maps.len(), 1);
//! assert!(css_text(&maps).starts_with("--primary: #6750a4;"));
//! # Ok::<(), material_tokens::MissingToneError>(())
//! ```

pub mod theme;
pub use theme::*;

pub mod properties;
pub use properties::*;

pub mod preset;
pub use preset::{BASE_STYLES, MaterialPreset, PresetOptions, material_preset, variable_contexts};

mod casing;
pub use casing::{kebab_case, lower_camel_case};

mod color;
pub use color::{Argb, ParseColorError};
