//! Flattening themes into CSS custom-property maps.
//!
//! [`properties_from_theme`] walks a [`Theme`] and produces ordered maps
//! of `--token` names to values. With no configured contexts
//! it merges everything into one map: the active scheme, both schemes
//! under `-light`/`-dark` suffixes, every tonal palette, and every custom
//! color. Each [`PropertyConfig`] in [`FlattenConfig::properties`]
//! instead yields its own independent map, with its own naming, subset,
//! and value transform.

mod config;
pub use config::*;

mod text;
pub use text::*;

use indexmap::IndexMap;
use thiserror::Error;

use crate::casing::{kebab_case, lower_camel_case};
use crate::theme::{CustomColorGroup, Scheme, Theme, TonalPalette};

/// An insertion-ordered map of custom-property declarations.
pub type Properties = IndexMap<String, PropertyValue>;

/// A tone was requested from a palette whose export does not sample it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("palette \"{palette}\" has no sample for tone {tone}")]
pub struct MissingToneError {
    pub palette: String,
    pub tone: u8,
}

/// Properties for every role of one scheme.
pub fn properties_from_scheme(scheme: &Scheme, config: &PropertyConfig) -> Properties {
    let mut properties = Properties::new();

    for (role, value) in scheme.entries() {
        let token = kebab_case(role);
        properties.insert(
            format!("--{}{}{}", config.prefix, token, config.suffix),
            config.resolve(value),
        );
    }

    properties
}

/// Properties for one palette, sampled at `tones` in order.
pub fn properties_from_palette(
    name: &str,
    palette: &TonalPalette,
    tones: &[u8],
    config: &PropertyConfig,
) -> Result<Properties, MissingToneError> {
    let mut properties = Properties::new();
    let key = kebab_case(name);

    for &tone in tones {
        let color = palette.tone(tone).ok_or_else(|| MissingToneError {
            palette: name.to_owned(),
            tone,
        })?;

        properties.insert(
            format!("--{}{}-{}{}", config.prefix, key, tone, config.suffix),
            config.resolve(color),
        );
    }

    Ok(properties)
}

/// Properties for one custom color group in one appearance.
///
/// Role keys have their literal `color` segment replaced by the group's
/// name, so `colorContainer` for "Brand One" becomes
/// `--brand-one-container`.
pub fn properties_from_custom_color(
    group: &CustomColorGroup,
    dark: bool,
    config: &PropertyConfig,
) -> Properties {
    let mut properties = Properties::new();
    let name = kebab_case(&lower_camel_case(&group.color.name));

    for (role, value) in group.variant(dark).entries() {
        // Substituted after kebab-casing; the capital C in "onColor"
        // would otherwise dodge the match.
        let token = kebab_case(role).replacen("color", &name, 1);
        properties.insert(
            format!("--{}{}{}", config.prefix, token, config.suffix),
            config.resolve(value),
        );
    }

    properties
}

/// Flattens a whole theme.
///
/// Returns one map per configured property context, or a single merged
/// map when [`FlattenConfig::properties`] is empty. Within a map, later
/// parts overwrite earlier ones on token collisions while keeping the
/// original insertion position.
pub fn properties_from_theme(
    theme: &Theme,
    config: &FlattenConfig,
) -> Result<Vec<Properties>, MissingToneError> {
    let scheme = if config.dark { &theme.schemes.dark } else { &theme.schemes.light };
    let tones = config.tones();

    if config.properties.is_empty() {
        let context = PropertyConfig::new();
        return Ok(vec![flatten_context(theme, scheme, tones, config.dark, &context)?]);
    }

    config
        .properties
        .iter()
        .map(|context| flatten_context(theme, scheme, tones, config.dark, context))
        .collect()
}

fn flatten_context(
    theme: &Theme,
    scheme: &Scheme,
    tones: &[u8],
    dark: bool,
    context: &PropertyConfig,
) -> Result<Properties, MissingToneError> {
    let mut properties = Properties::new();

    if context.includes(ThemePart::Scheme) {
        properties.extend(properties_from_scheme(scheme, context));
    }

    if context.includes(ThemePart::SchemeLight) {
        properties.extend(properties_from_scheme(&theme.schemes.light, &variant(context, "-light")));
    }

    if context.includes(ThemePart::SchemeDark) {
        properties.extend(properties_from_scheme(&theme.schemes.dark, &variant(context, "-dark")));
    }

    if context.includes(ThemePart::Palettes) {
        for (name, palette) in &theme.palettes {
            properties.extend(properties_from_palette(name, palette, tones, context)?);
        }
    }

    if context.includes(ThemePart::CustomColors) {
        for group in &theme.custom_colors {
            properties.extend(properties_from_custom_color(group, dark, context));
            properties.extend(properties_from_custom_color(group, false, &variant(context, "-light")));
            properties.extend(properties_from_custom_color(group, true, &variant(context, "-dark")));

            if let Some(palette) = &group.palette {
                let name = lower_camel_case(&group.color.name);
                properties.extend(properties_from_palette(&name, palette, tones, context)?);
            }
        }
    }

    Ok(properties)
}

/// A copy of `context` with a variant suffix composed before the user
/// suffix: `-light` plus `-rgb` names `--primary-light-rgb`.
fn variant(context: &PropertyConfig, suffix: &str) -> PropertyConfig {
    let mut context = context.clone();
    context.suffix = format!("{suffix}{}", context.suffix);
    context
}
