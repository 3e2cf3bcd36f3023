//! Dataset file loading.
//!
//! All file reads go through these functions so that missing files and
//! parse errors are reported with the offending path. The format is chosen
//! by extension: `.yaml`/`.yml` are YAML, everything else is JSON.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{MetadataError, MetadataResult};

/// Serialization format of a dataset or address file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

fn read_to_string(path: &Path) -> MetadataResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MetadataError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MetadataError::Io(e)
        }
    })
}

/// Load a JSON file into a strongly-typed struct.
pub fn load_json_typed<T: DeserializeOwned>(path: &Path) -> MetadataResult<T> {
    let content = read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| MetadataError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a YAML file into a strongly-typed struct.
pub fn load_yaml_typed<T: DeserializeOwned>(path: &Path) -> MetadataResult<T> {
    let content = read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| MetadataError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a JSON or YAML file, choosing the parser by extension.
pub fn load_typed<T: DeserializeOwned>(path: &Path) -> MetadataResult<T> {
    match FileFormat::from_path(path) {
        FileFormat::Json => load_json_typed(path),
        FileFormat::Yaml => load_yaml_typed(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Write;

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.YML")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("noext")), FileFormat::Json);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_typed::<BTreeMap<String, String>>(Path::new("/nonexistent/data.json"))
            .unwrap_err();
        assert!(matches!(err, MetadataError::FileNotFound { .. }));
    }

    #[test]
    fn json_parse_error_carries_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_typed::<BTreeMap<String, String>>(file.path()).unwrap_err();
        assert!(matches!(err, MetadataError::JsonParse { .. }));
        assert!(format!("{err}").contains(&file.path().display().to_string()));
    }

    #[test]
    fn yaml_file_loads() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "a: one\nb: two").unwrap();
        let map: BTreeMap<String, String> = load_typed(file.path()).unwrap();
        assert_eq!(map.get("b").map(String::as_str), Some("two"));
    }
}
