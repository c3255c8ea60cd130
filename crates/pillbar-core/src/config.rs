//! Configuration management for pillbar.
//!
//! Loads configuration from ${PILLBAR_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fit::RowWidth;
use crate::options::PillOption;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time; edit that file to
/// change the template. The seed catalog there must stay in sync with
/// `default_catalog`.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// Keeps template comments/sections present while preserving the user's
/// customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from the source table into the target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            // Arrays of tables (the catalog) are taken wholesale from the user.
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for pillbar configuration and data.
    //!
    //! PILLBAR_HOME resolution order:
    //! 1. PILLBAR_HOME environment variable (if set)
    //! 2. ~/.config/pillbar (default)

    use std::path::PathBuf;

    /// Returns the pillbar home directory.
    pub fn pillbar_home() -> PathBuf {
        if let Ok(home) = std::env::var("PILLBAR_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("pillbar"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        pillbar_home().join("config.toml")
    }

    /// Returns the directory the demo writes log files into.
    pub fn logs_dir() -> PathBuf {
        pillbar_home().join("logs")
    }
}

/// Pill-row layout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RowConfig {
    /// Total-width policy: "auto" or a fixed column count.
    pub width: RowWidth,
    /// Per-pill overhead override, in the measurer's unit.
    pub overhead: Option<u16>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pill-row layout settings.
    pub row: RowConfig,

    /// Options offered by the demo catalog.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<PillOption>,
}

/// Seed catalog used when no config file exists.
fn default_catalog() -> Vec<PillOption> {
    [
        ("US East (N. Virginia)", "us-east-1"),
        ("US West (Oregon)", "us-west-2"),
        ("EU West (Ireland)", "eu-west-1"),
        ("EU Central (Frankfurt)", "eu-central-1"),
        ("Asia Pacific (Tokyo)", "ap-northeast-1"),
        ("Asia Pacific (Sydney)", "ap-southeast-2"),
        ("South America (São Paulo)", "sa-east-1"),
        ("Canada (Central)", "ca-central-1"),
        ("Middle East (Bahrain)", "me-south-1"),
        ("Africa (Cape Town)", "af-south-1"),
    ]
    .into_iter()
    .map(|(label, value)| PillOption::new(label, value))
    .collect()
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Saves only the row width policy to the config file.
    pub fn save_width(width: RowWidth) -> Result<()> {
        Self::save_width_to(&paths::config_path(), width)
    }

    /// Saves only the row width policy to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist;
    /// otherwise merges the user's values into the latest template so
    /// comments stay current.
    pub fn save_width_to(path: &Path, width: RowWidth) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["row"]["width"] = match width {
            RowWidth::Auto => value("auto"),
            RowWidth::Fixed(cols) => value(i64::from(cols)),
        };

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as
    /// needed. Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row: RowConfig::default(),
            catalog: default_catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Auto);
        assert_eq!(config.row.overhead, None);
        assert_eq!(config.catalog, default_catalog());
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[row]\nwidth = 120\noverhead = 7\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Fixed(120));
        assert_eq!(config.row.overhead, Some(7));
        assert_eq!(config.catalog, default_catalog());
    }

    /// Width field accepts the "auto" keyword.
    #[test]
    fn test_load_width_auto_keyword() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[row]\nwidth = \"auto\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Auto);
    }

    /// Catalog entries load from array-of-tables syntax.
    #[test]
    fn test_load_catalog_entries() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[[catalog]]
label = "Prometheus"
value = "prometheus"

[[catalog]]
label = "Loki"
value = "loki"
"#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog[0].label, "Prometheus");
        assert_eq!(config.catalog[1].value, "loki");
    }

    /// The embedded template expresses exactly the compiled defaults.
    #[test]
    fn test_template_matches_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.row.width, RowWidth::Auto);
        assert_eq!(config.row.overhead, None);
        assert_eq!(config.catalog, default_catalog());
    }

    /// Config init: creates file with the template, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# pillbar configuration"));
        assert!(contents.contains("width = \"auto\""));
        assert!(contents.contains("# overhead = 5"));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// save_width: creates a new config file with the template.
    #[test]
    fn test_save_width_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_width_to(&config_path, RowWidth::Fixed(80)).unwrap();

        assert!(config_path.exists());

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Fixed(80));

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# pillbar configuration"));
    }

    /// save_width: preserves other fields in an existing config.
    #[test]
    fn test_save_width_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[row]
width = "auto"
overhead = 9

[[catalog]]
label = "Only"
value = "only"
"#,
        )
        .unwrap();

        Config::save_width_to(&config_path, RowWidth::Fixed(64)).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Fixed(64));
        assert_eq!(config.row.overhead, Some(9)); // preserved
        assert_eq!(config.catalog.len(), 1); // preserved
        assert_eq!(config.catalog[0].label, "Only");
    }

    /// save_width: round-trips back to auto.
    #[test]
    fn test_save_width_roundtrip_auto() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_width_to(&config_path, RowWidth::Fixed(100)).unwrap();
        Config::save_width_to(&config_path, RowWidth::Auto).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Auto);
    }

    /// save_width: creates parent directories if needed.
    #[test]
    fn test_save_width_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("dir").join("config.toml");

        Config::save_width_to(&config_path, RowWidth::Fixed(40)).unwrap();

        assert!(config_path.exists());
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.row.width, RowWidth::Fixed(40));
    }
}
