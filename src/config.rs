use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Optional `.cardex.toml` living next to the database. Absent file and
/// absent keys both mean defaults.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// `false` switches deletions to restrict mode: entries with dependents
    /// cannot be removed until the dependents are gone.
    pub cascade_delete: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            cascade_delete: true,
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: ColorChoice,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Default for ColorChoice {
    fn default() -> Self {
        ColorChoice::Auto
    }
}

pub fn load(path: &Path) -> Result<Config, String> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(format!("could not read '{}': {}", path.display(), e)),
    };

    toml::from_str(&text).map_err(|e| format!("malformed config '{}': {}", path.display(), e))
}

#[test]
fn test_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.store.cascade_delete);
    assert_eq!(config.output.color, ColorChoice::Auto);
}

#[test]
fn test_full_config() {
    let config: Config = toml::from_str(
        r#"
            [store]
            cascade_delete = false

            [output]
            color = "never"
        "#,
    )
    .unwrap();
    assert!(!config.store.cascade_delete);
    assert_eq!(config.output.color, ColorChoice::Never);
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("[store]\ncascade = 1\n").is_err());
}
