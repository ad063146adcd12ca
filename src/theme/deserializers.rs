use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use super::TonalPalette;
use crate::color::Argb;

impl<'de> Deserialize<'de> for TonalPalette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let samples = IndexMap::<u8, Argb>::deserialize(deserializer)?;

        if let Some((tone, _)) = samples.iter().find(|(tone, _)| **tone > 100) {
            return Err(D::Error::custom(format!(
                "tone {tone} is outside the 0-100 range"
            )));
        }

        Ok(TonalPalette::from_samples(samples))
    }
}
