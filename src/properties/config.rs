use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::color::Argb;

/// Tones sampled from every palette when a flatten call does not pick its
/// own set.
pub const TONES_DEFAULT: [u8; 14] = [0, 5, 10, 15, 20, 30, 40, 50, 60, 70, 80, 90, 95, 100];

/// A generated custom-property value: CSS text or a bare number.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<f64> for PropertyValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// Converts one resolved color into its emitted value.
pub type ColorTransform = fn(Argb) -> PropertyValue;

/// Ready-made color transforms.
pub mod transforms {
    use super::PropertyValue;
    use crate::color::Argb;

    /// The default conversion: lowercase CSS hex.
    pub fn hex(color: Argb) -> PropertyValue {
        PropertyValue::Text(color.to_hex())
    }

    /// Space-separated decimal channels (`"103 80 164"`), the form
    /// `rgb(var(--token) / <alpha-value>)` consumes.
    pub fn rgb_channels(color: Argb) -> PropertyValue {
        PropertyValue::Text(format!("{} {} {}", color.red(), color.green(), color.blue()))
    }

    /// The raw ARGB integer as a number.
    pub fn argb_number(color: Argb) -> PropertyValue {
        PropertyValue::Number(f64::from(color.0))
    }
}

/// Structural parts of a theme a property context can single out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePart {
    /// The scheme picked by [`FlattenConfig::dark`], without a suffix.
    Scheme,
    /// The light scheme, tokens suffixed `-light`.
    SchemeLight,
    /// The dark scheme, tokens suffixed `-dark`.
    SchemeDark,
    /// Every named tonal palette.
    Palettes,
    /// Every custom color group, including its palette.
    CustomColors,
}

/// Naming and formatting rules for one generated map of properties.
#[derive(Debug, Clone, Default)]
pub struct PropertyConfig {
    /// Inserted between `--` and the token.
    pub prefix: String,
    /// Appended after the token, composing after variant suffixes.
    pub suffix: String,
    /// When set, only the listed parts are generated.
    pub subset: Option<SmallVec<[ThemePart; 5]>>,
    /// When set, replaces the hex conversion for every value in this
    /// context.
    pub transform: Option<ColorTransform>,
}

impl PropertyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn subset(mut self, parts: impl IntoIterator<Item = ThemePart>) -> Self {
        self.subset = Some(parts.into_iter().collect());
        self
    }

    pub fn transform(mut self, transform: ColorTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Whether `part` is generated under this context.
    pub fn includes(&self, part: ThemePart) -> bool {
        self.subset.as_ref().is_none_or(|subset| subset.contains(&part))
    }

    /// Applies this context's transform, falling back to hex conversion.
    pub fn resolve(&self, color: Argb) -> PropertyValue {
        match self.transform {
            Some(transform) => transform(color),
            None => transforms::hex(color),
        }
    }
}

/// Options for one flatten call.
#[derive(Debug, Clone, Default)]
pub struct FlattenConfig {
    /// Fills the unsuffixed scheme tokens from the dark scheme instead of
    /// the light one.
    pub dark: bool,
    /// Tones sampled from every palette; defaults to [`TONES_DEFAULT`].
    pub palette_tones: Option<SmallVec<[u8; 14]>>,
    /// Property contexts, one generated map each; empty means a single
    /// map with default naming.
    pub properties: SmallVec<[PropertyConfig; 2]>,
}

impl FlattenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    pub fn palette_tones(mut self, tones: impl IntoIterator<Item = u8>) -> Self {
        self.palette_tones = Some(tones.into_iter().collect());
        self
    }

    /// Appends a property context.
    pub fn property(mut self, config: PropertyConfig) -> Self {
        self.properties.push(config);
        self
    }

    pub(crate) fn tones(&self) -> &[u8] {
        self.palette_tones.as_deref().unwrap_or(&TONES_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_display() {
        assert_eq!(PropertyValue::Text("#6750a4".into()).to_string(), "#6750a4");
        assert_eq!(PropertyValue::Number(1.0).to_string(), "1");
        assert_eq!(PropertyValue::Number(0.5).to_string(), "0.5");
        assert_eq!(PropertyValue::Number(4284960932.0).to_string(), "4284960932");
    }

    #[test]
    fn test_builtin_transforms() {
        let color = Argb::new(0xFF67_50A4);

        assert_eq!(transforms::hex(color), PropertyValue::Text("#6750a4".into()));
        assert_eq!(transforms::rgb_channels(color), PropertyValue::Text("103 80 164".into()));
        assert_eq!(transforms::argb_number(color), PropertyValue::Number(4284960932.0));
    }

    #[test]
    fn test_config_resolve_defaults_to_hex() {
        let color = Argb::new(0xFF67_50A4);

        let default = PropertyConfig::new();
        assert_eq!(default.resolve(color), PropertyValue::Text("#6750a4".into()));

        let numeric = PropertyConfig::new().transform(transforms::argb_number);
        assert_eq!(numeric.resolve(color), PropertyValue::Number(4284960932.0));
    }

    #[test]
    fn test_user_written_transforms_fit_the_fn_signature() {
        fn mixed(color: Argb) -> PropertyValue {
            format!("color-mix(in srgb, {} 50%, white)", color.to_hex()).into()
        }

        fn alpha_fraction(color: Argb) -> PropertyValue {
            (f64::from(color.alpha()) / 255.0).into()
        }

        let config = PropertyConfig::new().transform(mixed);
        assert_eq!(
            config.resolve(Argb::new(0xFF00_0000)),
            PropertyValue::Text("color-mix(in srgb, #000000 50%, white)".into())
        );

        let config = PropertyConfig::new().transform(alpha_fraction);
        assert_eq!(config.resolve(Argb::new(0xFF67_50A4)), PropertyValue::Number(1.0));
        assert_eq!(config.resolve(Argb::new(0x0067_50A4)), PropertyValue::Number(0.0));
    }

    #[test]
    fn test_subset_gating() {
        let unrestricted = PropertyConfig::new();
        assert!(unrestricted.includes(ThemePart::Scheme));
        assert!(unrestricted.includes(ThemePart::CustomColors));

        let palettes_only = PropertyConfig::new().subset([ThemePart::Palettes]);
        assert!(palettes_only.includes(ThemePart::Palettes));
        assert!(!palettes_only.includes(ThemePart::Scheme));
        assert!(!palettes_only.includes(ThemePart::SchemeLight));
        assert!(!palettes_only.includes(ThemePart::CustomColors));
    }

    #[test]
    fn test_flatten_config_tone_fallback() {
        assert_eq!(FlattenConfig::new().tones(), TONES_DEFAULT);
        assert_eq!(FlattenConfig::new().palette_tones([0, 50, 100]).tones(), [0, 50, 100]);
    }
}
