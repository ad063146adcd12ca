use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Argb;

/// A full Material theme export.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// The seed color the theme was derived from.
    pub source: Argb,
    pub schemes: Schemes,
    pub palettes: IndexMap<String, TonalPalette>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_colors: Vec<CustomColorGroup>,
}

impl Theme {
    /// Parses a theme from its JSON export.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }

    /// The built-in Material baseline theme (seed `#6750a4`), useful as a
    /// fixture and for demos.
    pub fn baseline() -> &'static Theme {
        static BASELINE: LazyLock<Theme> = LazyLock::new(|| {
            Theme::from_json(include_str!("../../themes/baseline.json"))
                .expect("the embedded baseline theme parses")
        });

        &BASELINE
    }
}

/// The resolved light and dark schemes of a theme.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Schemes {
    pub light: Scheme,
    pub dark: Scheme,
}

macro_rules! scheme_roles {
    ( $( $field:ident => $key:literal ),+ $(,)? ) => {
        /// A complete set of Material color roles for one appearance.
        #[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
        #[serde(rename_all = "camelCase")]
        pub struct Scheme {
            $( pub $field: Argb, )+
        }

        impl Scheme {
            /// Every role name in declaration order, in the camelCase
            /// spelling theme exports use.
            pub const ROLES: &'static [&'static str] = &[ $( $key ),+ ];

            /// Role/value pairs in declaration order.
            pub fn entries(&self) -> impl Iterator<Item = (&'static str, Argb)> {
                [ $( ($key, self.$field) ),+ ].into_iter()
            }

            #[cfg(test)]
            pub(crate) fn uniform(color: Argb) -> Self {
                Self { $( $field: color, )+ }
            }
        }
    };
}

scheme_roles! {
    primary => "primary",
    on_primary => "onPrimary",
    primary_container => "primaryContainer",
    on_primary_container => "onPrimaryContainer",
    secondary => "secondary",
    on_secondary => "onSecondary",
    secondary_container => "secondaryContainer",
    on_secondary_container => "onSecondaryContainer",
    tertiary => "tertiary",
    on_tertiary => "onTertiary",
    tertiary_container => "tertiaryContainer",
    on_tertiary_container => "onTertiaryContainer",
    error => "error",
    on_error => "onError",
    error_container => "errorContainer",
    on_error_container => "onErrorContainer",
    background => "background",
    on_background => "onBackground",
    surface => "surface",
    on_surface => "onSurface",
    surface_variant => "surfaceVariant",
    on_surface_variant => "onSurfaceVariant",
    surface_dim => "surfaceDim",
    surface_bright => "surfaceBright",
    surface_container_lowest => "surfaceContainerLowest",
    surface_container_low => "surfaceContainerLow",
    surface_container => "surfaceContainer",
    surface_container_high => "surfaceContainerHigh",
    surface_container_highest => "surfaceContainerHighest",
    outline => "outline",
    outline_variant => "outlineVariant",
    shadow => "shadow",
    scrim => "scrim",
    surface_tint => "surfaceTint",
    inverse_surface => "inverseSurface",
    inverse_on_surface => "inverseOnSurface",
    inverse_primary => "inversePrimary",
    primary_fixed => "primaryFixed",
    primary_fixed_dim => "primaryFixedDim",
    on_primary_fixed => "onPrimaryFixed",
    on_primary_fixed_variant => "onPrimaryFixedVariant",
    secondary_fixed => "secondaryFixed",
    secondary_fixed_dim => "secondaryFixedDim",
    on_secondary_fixed => "onSecondaryFixed",
    on_secondary_fixed_variant => "onSecondaryFixedVariant",
    tertiary_fixed => "tertiaryFixed",
    tertiary_fixed_dim => "tertiaryFixedDim",
    on_tertiary_fixed => "onTertiaryFixed",
    on_tertiary_fixed_variant => "onTertiaryFixedVariant",
}

/// A tonal palette sampled at a finite set of tones.
///
/// Theme exports carry palettes as pre-resolved tone/color maps rather
/// than as hue and chroma, so looking up a tone the export did not sample
/// yields `None`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct TonalPalette {
    samples: IndexMap<u8, Argb>,
}

impl TonalPalette {
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (u8, Argb)>,
    {
        let samples = samples
            .into_iter()
            .inspect(|(tone, _)| debug_assert!(*tone <= 100, "tone {tone} is outside 0-100"))
            .collect();

        Self { samples }
    }

    /// The sampled color at `tone`, if the export included that tone.
    pub fn tone(&self, tone: u8) -> Option<Argb> {
        self.samples.get(&tone).copied()
    }

    /// Sampled tones in export order.
    pub fn tones(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A brand color submitted alongside the theme seed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomColor {
    pub name: String,
    pub value: Argb,
    /// Whether the generator harmonized the color toward the theme seed.
    #[serde(default)]
    pub blend: bool,
}

/// The four roles a custom color resolves to in one appearance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorGroup {
    pub color: Argb,
    pub on_color: Argb,
    pub color_container: Argb,
    pub on_color_container: Argb,
}

impl ColorGroup {
    /// Role/value pairs in declaration order, keyed by the camelCase
    /// spelling theme exports use.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Argb)> {
        [
            ("color", self.color),
            ("onColor", self.on_color),
            ("colorContainer", self.color_container),
            ("onColorContainer", self.on_color_container),
        ]
        .into_iter()
    }
}

/// A custom color resolved against the theme: the original request, the
/// (possibly harmonized) value, and role groups per appearance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomColorGroup {
    pub color: CustomColor,
    pub value: Argb,
    pub light: ColorGroup,
    pub dark: ColorGroup,
    /// Tonal ramp of the resolved value. Exports that omit it simply get
    /// no palette tokens for the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<TonalPalette>,
}

impl CustomColorGroup {
    /// The role group for the requested appearance.
    pub fn variant(&self, dark: bool) -> &ColorGroup {
        if dark { &self.dark } else { &self.light }
    }
}
