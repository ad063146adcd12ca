//! Flattens the built-in baseline theme and prints a `:root` block with
//! both hex tokens and the `-rgb` channel triples the Tailwind preset
//! reads.

use material_tokens::{FlattenConfig, Theme, css_text, properties_from_theme, variable_contexts};

fn main() {
    let mut config = FlattenConfig::new();
    config.properties = variable_contexts();

    let maps = properties_from_theme(Theme::baseline(), &config)
        .expect("the baseline palettes sample every default tone");

    let total: usize = maps.iter().map(|properties| properties.len()).sum();
    eprintln!("{} properties across {} contexts", total, maps.len());

    println!(":root {{{}}}", css_text(&maps));
}
