use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // Bundled root_level must be a real heading level
    if let Some(level) = table
        .get("sections")
        .and_then(|s| s.get("root_level"))
        .and_then(|v| v.as_integer())
    {
        if !(1..=6).contains(&level) {
            panic!("default_config.toml: sections.root_level must be 1-6, got {}", level);
        }
    }
}
