use std::fmt::Write;

use super::Properties;

/// Serializes property maps into CSS declaration text.
///
/// Entries render as `name: value;` in insertion order, with no
/// separators between entries or between maps. The output drops straight
/// into a selector block or an inline `style` attribute.
pub fn css_text(maps: &[Properties]) -> String {
    let mut output = String::new();

    for properties in maps {
        for (name, value) in properties {
            _ = write!(output, "{name}: {value};");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::super::PropertyValue;
    use super::*;

    #[test]
    fn test_css_text_declaration_format() {
        let first = Properties::from([("--a".to_owned(), "#fff".into())]);
        let second = Properties::from([("--b".to_owned(), PropertyValue::Number(1.0))]);

        assert_eq!(css_text(&[first, second]), "--a: #fff;--b: 1;");
    }

    #[test]
    fn test_css_text_runs_entries_and_maps_together() {
        let properties = Properties::from([
            ("--a".to_owned(), PropertyValue::Text("#fff".into())),
            ("--a-rgb".to_owned(), PropertyValue::Text("255 255 255".into())),
        ]);

        assert_eq!(css_text(&[properties]), "--a: #fff;--a-rgb: 255 255 255;");
    }

    #[test]
    fn test_css_text_of_nothing_is_empty() {
        assert_eq!(css_text(&[]), "");
        assert_eq!(css_text(&[Properties::new()]), "");
    }
}
