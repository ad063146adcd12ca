//! Prints the generated Tailwind preset as JSON, plus the base styles
//! that apply the scheme to the page.

use material_tokens::preset::{BASE_STYLES, PresetOptions, material_preset};

fn main() {
    let preset = material_preset(&PresetOptions::new().extend(true));
    let json = serde_json::to_string_pretty(&preset).expect("the preset serializes");

    println!("{json}");
    println!();
    println!("/* base styles */");
    println!("{BASE_STYLES}");
}
