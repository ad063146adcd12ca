use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// A color in `0xAARRGGBB` layout, the integer encoding Material theme
/// exports use for every color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Renders the color as lowercase CSS hex: `#rrggbb` for fully opaque
    /// colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.alpha() == 0xFF {
            format!("#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red(),
                self.green(),
                self.blue(),
                self.alpha()
            )
        }
    }

    /// Parses `rgb`, `rrggbb`, or `rrggbbaa` hex digits, with or without a
    /// leading `#`. Three- and six-digit forms are fully opaque.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let error = || ParseColorError(input.to_owned());
        let digits = input.strip_prefix('#').unwrap_or(input);

        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(error());
        }

        match digits.len() {
            3 => {
                let short = u32::from_str_radix(digits, 16).map_err(|_| error())?;
                let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
                Ok(Self(0xFF00_0000 | (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            6 => {
                let rgb = u32::from_str_radix(digits, 16).map_err(|_| error())?;
                Ok(Self(0xFF00_0000 | rgb))
            }
            8 => {
                let rgba = u32::from_str_radix(digits, 16).map_err(|_| error())?;
                Ok(Self(rgba.rotate_right(8)))
            }
            _ => Err(error()),
        }
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Argb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrHex {
            Int(u32),
            Hex(String),
        }

        match IntOrHex::deserialize(deserializer)? {
            IntOrHex::Int(value) => Ok(Self(value)),
            IntOrHex::Hex(string) => Self::from_hex(&string).map_err(D::Error::custom),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{0}\" is not a valid hex color")]
pub struct ParseColorError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let color = Argb::new(0x8067_50A4);

        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x67);
        assert_eq!(color.green(), 0x50);
        assert_eq!(color.blue(), 0xA4);
        assert_eq!(Argb::from_channels(0x80, 0x67, 0x50, 0xA4), color);
    }

    #[test]
    fn test_to_hex_opaque_omits_alpha() {
        assert_eq!(Argb::new(0xFF67_50A4).to_hex(), "#6750a4");
        assert_eq!(Argb::new(0xFFFF_FFFF).to_hex(), "#ffffff");
        assert_eq!(Argb::new(0xFF00_0000).to_hex(), "#000000");
    }

    #[test]
    fn test_to_hex_translucent_appends_alpha() {
        assert_eq!(Argb::new(0x8067_50A4).to_hex(), "#6750a480");
        assert_eq!(Argb::new(0x0000_0000).to_hex(), "#00000000");
    }

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Argb::from_hex("#6750a4"), Ok(Argb::new(0xFF67_50A4)));
        assert_eq!(Argb::from_hex("6750A4"), Ok(Argb::new(0xFF67_50A4)));
        assert_eq!(Argb::from_hex("#abc"), Ok(Argb::new(0xFFAA_BBCC)));
        assert_eq!(Argb::from_hex("#6750a480"), Ok(Argb::new(0x8067_50A4)));
    }

    #[test]
    fn test_from_hex_round_trips_to_hex() {
        for value in [0xFF67_50A4, 0xFF00_0000, 0x8067_50A4, 0x01FF_00FF] {
            let color = Argb::new(value);
            assert_eq!(Argb::from_hex(&color.to_hex()), Ok(color));
        }
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        assert!(Argb::from_hex("").is_err());
        assert!(Argb::from_hex("#67").is_err());
        assert!(Argb::from_hex("#6750a").is_err());
        assert!(Argb::from_hex("#6750ag").is_err());
        assert!(Argb::from_hex("# 6750a4").is_err());
    }

    #[test]
    fn test_display_matches_to_hex() {
        assert_eq!(Argb::new(0xFF67_50A4).to_string(), "#6750a4");
    }

    #[test]
    fn test_deserialize_accepts_int_and_hex_string() {
        let from_int: Argb = serde_json::from_str("4284960932").expect("int form should parse");
        let from_hex: Argb = serde_json::from_str("\"#6750a4\"").expect("hex form should parse");

        assert_eq!(from_int, Argb::new(0xFF67_50A4));
        assert_eq!(from_int, from_hex);
        assert!(serde_json::from_str::<Argb>("\"#nope\"").is_err());
    }

    #[test]
    fn test_serialize_as_integer() {
        let json = serde_json::to_string(&Argb::new(0xFF67_50A4)).expect("color should serialize");
        assert_eq!(json, "4284960932");
    }
}
