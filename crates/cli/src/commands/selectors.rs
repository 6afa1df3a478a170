//! `stringify selectors` — List the built-in selectors.

use stringify_core::spec::CATALOG;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Built-in selectors (use with -S/--select, repeat to concatenate):\n");
    for line in catalog_lines() {
        println!("  {line}");
    }
    Ok(())
}

fn catalog_lines() -> Vec<String> {
    let width = CATALOG.iter().map(|(_, usage, _)| usage.len()).max().unwrap_or(0);
    CATALOG
        .iter()
        .map(|(_, usage, description)| format!("{usage:<width$}  {description}"))
        .collect()
}
