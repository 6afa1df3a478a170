//! `stringify config` — Configuration management commands.

use std::path::Path;

use stringify_config::StringifyConfig;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = StringifyConfig::config_path();
    println!("🔍 Validating {}...", config_path.display());

    match StringifyConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();
            if !config_path.exists() {
                warnings.push("No config file found, defaults are in effect");
            }
            if config.input.skip_empty && !config.input.trim {
                warnings.push("skip_empty without trim keeps whitespace-only lines");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Separator:  {:?}", config.separator);
            println!("   Selectors:  {}", describe_selectors(&config.selectors));
            println!("   Trim:       {}", config.input.trim);
            println!("   Skip empty: {}", config.input.skip_empty);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StringifyConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", StringifyConfig::config_path().display());
    Ok(())
}

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = StringifyConfig::config_path();
    if write_default(&config_path)? {
        println!("✅ Created config.toml at: {}", config_path.display());
    } else {
        println!("⚠️  Config already exists at: {}", config_path.display());
    }
    Ok(())
}

/// Write the default config to `path` unless a file is already there.
fn write_default(path: &Path) -> Result<bool, std::io::Error> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, StringifyConfig::default_toml())?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}

fn describe_selectors(selectors: &[String]) -> String {
    if selectors.is_empty() {
        "(none)".into()
    } else {
        selectors.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_valid() {
        let path = StringifyConfig::config_dir().join("config.toml");
        assert!(path.to_str().unwrap().contains("config.toml"));
    }

    #[test]
    fn write_default_creates_once() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        assert!(write_default(&path).unwrap());
        assert!(!write_default(&path).unwrap());

        let config = StringifyConfig::load_from(&path).unwrap();
        assert_eq!(config.separator, "");
    }

    #[test]
    fn describe_selectors_lists_specs() {
        assert_eq!(describe_selectors(&[]), "(none)");
        assert_eq!(
            describe_selectors(&["trim".to_string(), "upper".to_string()]),
            "trim upper"
        );
    }
}
