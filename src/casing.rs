/// Converts a camelCase role or palette key into the kebab-case spelling
/// used for CSS custom properties.
///
/// A hyphen is inserted at every lowercase-to-uppercase boundary and the
/// result is lowercased, so already-kebab-case input passes through
/// unchanged.
pub fn kebab_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + 4);
    let mut previous_lowercase = false;

    for ch in input.chars() {
        if previous_lowercase && ch.is_ascii_uppercase() {
            output.push('-');
        }

        previous_lowercase = ch.is_ascii_lowercase();
        output.push(ch.to_ascii_lowercase());
    }

    output
}

/// Converts a free-form name ("Brand One", "brand-one") into camelCase.
///
/// The input is split on every non-alphanumeric run; the first word is
/// lowercased and every later word is capitalized.
pub fn lower_camel_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let words = input
        .trim()
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty());

    for (index, word) in words.enumerate() {
        if index == 0 {
            output.push_str(&word.to_ascii_lowercase());
        } else if let Some(first) = word.chars().next() {
            output.push(first.to_ascii_uppercase());
            output.extend(word[first.len_utf8()..].chars().map(|ch| ch.to_ascii_lowercase()));
        }
    }

    output
}
