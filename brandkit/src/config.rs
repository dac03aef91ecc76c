//! Settings resolution: command-line flags over the optional TOML file over
//! built-in defaults.

use anyhow::{Context, Result};
use brandkit_core::{Color, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::{ColorArgs, GenerateArgs};

pub const DEFAULT_OUTPUT_DIR: &str = "branding";

/// One source of settings; unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub logo: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigLayer {
    /// Loads a TOML file. Relative paths inside it are taken relative to the
    /// file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut layer: ConfigLayer =
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        layer.logo = layer.logo.map(|p| base.join(p));
        layer.output_dir = layer.output_dir.map(|p| base.join(p));
        log::debug!("loaded config {}: {:?}", path.display(), layer);
        Ok(layer)
    }

    /// Fields set on `self` win over `lower`.
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            primary: self.primary.or(lower.primary),
            secondary: self.secondary.or(lower.secondary),
            logo: self.logo.or(lower.logo),
            output_dir: self.output_dir.or(lower.output_dir),
        }
    }
}

impl From<&ColorArgs> for ConfigLayer {
    fn from(args: &ColorArgs) -> Self {
        ConfigLayer {
            primary: args.primary,
            secondary: args.secondary,
            ..ConfigLayer::default()
        }
    }
}

impl From<&GenerateArgs> for ConfigLayer {
    fn from(args: &GenerateArgs) -> Self {
        ConfigLayer {
            logo: args.logo.clone(),
            output_dir: args.out.clone(),
            ..ConfigLayer::from(&args.colors)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub primary: Color,
    pub secondary: Color,
    pub logo: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn from_layer(layer: ConfigLayer) -> Self {
        Settings {
            primary: layer.primary.unwrap_or(DEFAULT_PRIMARY),
            secondary: layer.secondary.unwrap_or(DEFAULT_SECONDARY),
            logo: layer.logo,
            output_dir: layer.output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }

    /// Resolves settings for a command, reading `config` when given.
    pub fn resolve(flags: ConfigLayer, config: Option<&Path>) -> Result<Self> {
        let file = match config {
            Some(path) => ConfigLayer::load(path)?,
            None => ConfigLayer::default(),
        };
        Ok(Settings::from_layer(flags.over(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::from_layer(ConfigLayer::default());
        assert_eq!(settings.primary.to_hex(), "#0078D4");
        assert_eq!(settings.secondary.to_hex(), "#106EBE");
        assert_eq!(settings.logo, None);
        assert_eq!(settings.output_dir, PathBuf::from("branding"));
    }

    #[test]
    fn flags_override_file() {
        let flags = ConfigLayer {
            primary: Some(hex("#ff0000")),
            ..ConfigLayer::default()
        };
        let file = ConfigLayer {
            primary: Some(hex("#00ff00")),
            secondary: Some(hex("#0000ff")),
            ..ConfigLayer::default()
        };
        let settings = Settings::from_layer(flags.over(file));
        assert_eq!(settings.primary, hex("#ff0000"));
        assert_eq!(settings.secondary, hex("#0000ff"));
    }

    #[test]
    fn loads_toml_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brandkit.toml");
        std::fs::write(
            &path,
            "primary = \"#8764B8\"\nlogo = \"assets/logo.png\"\noutput_dir = \"dist\"\n",
        )
        .unwrap();

        let settings = Settings::resolve(ConfigLayer::default(), Some(&path)).unwrap();
        assert_eq!(settings.primary.to_hex(), "#8764B8");
        assert_eq!(settings.secondary, DEFAULT_SECONDARY);
        assert_eq!(settings.logo, Some(dir.path().join("assets/logo.png")));
        assert_eq!(settings.output_dir, dir.path().join("dist"));
    }

    #[test]
    fn invalid_color_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brandkit.toml");
        std::fs::write(&path, "primary = \"#12345\"\n").unwrap();

        let err = ConfigLayer::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color format"), "{err:#}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brandkit.toml");
        std::fs::write(&path, "accent = \"#123456\"\n").unwrap();
        assert!(ConfigLayer::load(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::resolve(ConfigLayer::default(), Some(&dir.path().join("none.toml"))).is_err());
    }
}
