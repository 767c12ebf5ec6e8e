use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

const REQUIRED_KEYS: &[(&str, &[&str])] = &[
    ("site", &["content", "static_dir", "public", "template"]),
    ("template", &["title_placeholder", "content_placeholder"]),
];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("Failed to read {DEFAULT_CONFIG}: {e}"));
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid {DEFAULT_CONFIG}: {e}"));

    // Every default must be spelled out so the embedded file documents the layout.
    for (section, keys) in REQUIRED_KEYS {
        let Some(section_table) = table.get(*section).and_then(toml::Value::as_table) else {
            panic!("{DEFAULT_CONFIG} is missing the [{section}] section");
        };
        for key in *keys {
            if section_table.get(*key).and_then(toml::Value::as_str).is_none() {
                panic!("{DEFAULT_CONFIG} is missing string key {section}.{key}");
            }
        }
    }
}
