//! Tailwind preset generation.
//!
//! The preset maps every scheme role to a Tailwind color that reads the
//! `-rgb` channel variables this crate emits, so utilities like
//! `bg-primary/50` keep working through Tailwind's alpha syntax.
//! Serialized to JSON, the value slots straight into the `presets` list
//! of a Tailwind config.

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::casing::kebab_case;
use crate::properties::{PropertyConfig, transforms};
use crate::theme::Scheme;

/// The base rule paired with the preset: page background and text color
/// follow the active scheme.
pub const BASE_STYLES: &str =
    "body { background: rgb(var(--background-rgb)); color: rgb(var(--on-background-rgb)); }";

/// Options for [`material_preset`].
#[derive(Debug, Clone, Default)]
pub struct PresetOptions {
    /// Place the colors under `theme.extend`, keeping Tailwind's default
    /// palette available, instead of replacing it.
    pub extend: bool,
}

impl PresetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(mut self, extend: bool) -> Self {
        self.extend = extend;
        self
    }
}

/// A generated Tailwind preset.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MaterialPreset {
    /// Always empty; presets carry their own content list and the
    /// consuming app supplies the real globs.
    pub content: Vec<String>,
    pub theme: PresetTheme,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PresetTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PresetColors>,
    pub extend: PresetExtend,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct PresetExtend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PresetColors>,
}

/// Color entries keyed by Tailwind color name.
pub type PresetColors = IndexMap<String, PresetColor>;

/// One Tailwind color: a single value, or a `DEFAULT`/`light`/`dark`
/// scale.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PresetColor {
    Single(String),
    Scale(IndexMap<String, String>),
}

/// Builds the Material color preset.
pub fn material_preset(options: &PresetOptions) -> MaterialPreset {
    let colors = Some(color_entries());
    let (base, extend) = if options.extend { (None, colors) } else { (colors, None) };

    MaterialPreset {
        content: Vec::new(),
        theme: PresetTheme {
            colors: base,
            extend: PresetExtend { colors: extend },
        },
    }
}

/// The flatten contexts that generate every variable the preset reads:
/// plain hex tokens plus the `-rgb` channel triples.
pub fn variable_contexts() -> SmallVec<[PropertyConfig; 2]> {
    SmallVec::from_buf([
        PropertyConfig::new(),
        PropertyConfig::new().suffix("-rgb").transform(transforms::rgb_channels),
    ])
}

fn alpha_reference(token: &str) -> String {
    format!("rgb(var(--{token}-rgb) / <alpha-value>)")
}

fn color_entries() -> PresetColors {
    let mut entries = PresetColors::new();

    for role in Scheme::ROLES {
        let token = kebab_case(role);

        // Fixed roles keep the same value in both appearances, so they
        // get no light/dark scale.
        if token.contains("fixed") {
            let reference = alpha_reference(&token);
            entries.insert(token, PresetColor::Single(reference));
        } else {
            let scale = IndexMap::from([
                ("DEFAULT".to_owned(), alpha_reference(&token)),
                ("light".to_owned(), alpha_reference(&format!("{token}-light"))),
                ("dark".to_owned(), alpha_reference(&format!("{token}-dark"))),
            ]);
            entries.insert(token, PresetColor::Scale(scale));
        }
    }

    // Primary-tinted elevation overlays.
    for (level, alpha) in [(1, "0.04"), (2, "0.08"), (3, "0.12")] {
        entries.insert(
            format!("surface-level-{level}"),
            PresetColor::Single(format!("rgb(var(--primary-rgb) / {alpha})")),
        );
    }

    entries
}
