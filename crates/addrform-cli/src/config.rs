//! # CLI Configuration
//!
//! Optional YAML settings file. Resolution order:
//!
//! 1. `--config <FILE>` (must exist)
//! 2. `addrform.yaml` in the working directory, if present
//! 3. built-in defaults
//!
//! Command-line flags override file values: `--show-name` and
//! `--no-show-name` (and their siblings) both win over the file.
//!
//! ```yaml
//! metadata: data/countries.yaml
//! show_name: true
//! show_organization: false
//! multiline_street: false
//! strict: true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use addrform_schema::DisplayOptions;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "addrform.yaml";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Alternate metadata dataset (JSON or YAML).
    pub metadata: Option<PathBuf>,
    pub show_name: bool,
    pub show_organization: bool,
    pub multiline_street: bool,
    /// Treat unknown country codes as errors.
    pub strict: bool,
}

impl Config {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Resolve the configuration for this run. A relative `metadata` path
    /// is taken relative to the config file's directory.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let mut config = Self::load(&path)?;
        if let (Some(metadata), Some(dir)) = (&config.metadata, path.parent()) {
            if metadata.is_relative() {
                config.metadata = Some(dir.join(metadata));
            }
        }
        Ok(config)
    }

    /// Display options from the file, overridden by any explicit flag.
    pub fn display_options(&self, flags: &DisplayFlags) -> DisplayOptions {
        DisplayOptions {
            show_name: resolve(flags.show_name, flags.no_show_name, self.show_name),
            show_organization: resolve(
                flags.show_organization,
                flags.no_show_organization,
                self.show_organization,
            ),
            multiline_street: resolve(
                flags.multiline_street,
                flags.no_multiline_street,
                self.multiline_street,
            ),
            hidden: flags.hide.iter().copied().collect(),
        }
    }
}

/// A switch given on the command line wins over the file value.
fn resolve(on: bool, off: bool, file: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        file
    }
}

/// Display switches shared by `schema` and `validate`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DisplayFlags {
    /// Include the recipient name field.
    #[arg(long, overrides_with = "no_show_name")]
    pub show_name: bool,

    /// Omit the recipient name field, even if the config file enables it.
    #[arg(long, overrides_with = "show_name")]
    pub no_show_name: bool,

    /// Include the organization field.
    #[arg(long, overrides_with = "no_show_organization")]
    pub show_organization: bool,

    /// Omit the organization field, even if the config file enables it.
    #[arg(long, overrides_with = "show_organization")]
    pub no_show_organization: bool,

    /// Collapse street lines into one multi-line input.
    #[arg(long, overrides_with = "no_multiline_street")]
    pub multiline_street: bool,

    /// Keep separate street lines, even if the config file collapses them.
    #[arg(long, overrides_with = "multiline_street")]
    pub no_multiline_street: bool,

    /// Keep a field in the schema but hide it (repeatable, e.g. `sortingCode`).
    #[arg(long, value_name = "FIELD")]
    pub hide: Vec<addrform_core::AddressField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrform_core::AddressField;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "show_name: true\nstrict: true\nmetadata: data.yaml\n",
        )
        .unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert!(config.show_name);
        assert!(config.strict);
        assert!(!config.multiline_street);
        assert_eq!(config.metadata, Some(dir.path().join("data.yaml")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(Some(&dir.path().join("nope.yaml")), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yaml");
        std::fs::write(&path, "show_nmae: true\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn absolute_metadata_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yaml");
        std::fs::write(&path, "metadata: /srv/countries.json\n").unwrap();
        let config = Config::discover(Some(&path), Path::new("/")).unwrap();
        assert_eq!(config.metadata, Some(PathBuf::from("/srv/countries.json")));
    }

    #[test]
    fn negated_flags_switch_off_file_settings() {
        let config = Config {
            show_name: true,
            show_organization: true,
            multiline_street: true,
            ..Config::default()
        };
        let flags = DisplayFlags {
            no_show_name: true,
            no_multiline_street: true,
            ..DisplayFlags::default()
        };
        let options = config.display_options(&flags);
        assert!(!options.show_name);
        assert!(options.show_organization);
        assert!(!options.multiline_street);
    }

    #[test]
    fn flags_add_to_file_settings() {
        let config = Config {
            show_name: true,
            ..Config::default()
        };
        let flags = DisplayFlags {
            multiline_street: true,
            hide: vec![AddressField::SortingCode],
            ..DisplayFlags::default()
        };
        let options = config.display_options(&flags);
        assert!(options.show_name);
        assert!(!options.show_organization);
        assert!(options.multiline_street);
        assert!(options.hidden.contains(&AddressField::SortingCode));
    }
}
