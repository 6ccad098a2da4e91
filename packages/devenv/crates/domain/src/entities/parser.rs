use super::catalog::{Catalog, Config};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {format} config: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("tool `{tool}` is declared in both `{first}` and `{second}`")]
    DuplicateTool {
        tool: String,
        first: String,
        second: String,
    },
    #[error("config file not found, tried: {0}")]
    NotFound(String),
}

/// Supported config formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
            ConfigFormat::Toml => write!(f, "TOML"),
        }
    }
}

/// Multi-format tool configuration parser (YAML, JSON, TOML)
pub struct ConfigParser;

impl ConfigParser {
    /// Read, parse and flatten a config file into a catalog.
    pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
        Catalog::from_config(Self::parse_file(path)?)
    }

    /// Auto-detect format from file extension and parse
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = Self::detect_format(path)?;
        Self::parse(&content, format)
    }

    /// Parse config from string with explicit format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse { format, message })
    }

    /// Detect format from file extension
    pub fn detect_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(format!(".{extension}"))),
        }
    }

    /// First existing path among `candidates`.
    pub fn find_config<P: AsRef<Path>>(candidates: &[P]) -> Result<PathBuf, ConfigError> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|path| path.is_file())
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                let tried: Vec<String> = candidates
                    .iter()
                    .map(|p| p.as_ref().display().to_string())
                    .collect();
                ConfigError::NotFound(tried.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InstallMethod;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_minimal() {
        let yaml = r#"
categories:
  utilities:
    git:
      display_name: Git
      install_method: apt
      package_name: git
"#;
        let config = ConfigParser::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.categories["utilities"].len(), 1);
    }

    #[test]
    fn test_parse_json_unknown_method_is_kept() {
        let json = r#"
        {
            "categories": {
                "editors": {
                    "helix": { "install_method": "snap", "extra_field": true }
                }
            }
        }
        "#;
        let config = ConfigParser::parse(json, ConfigFormat::Json).unwrap();
        assert_eq!(
            config.categories["editors"]["helix"].install_method,
            InstallMethod::Unknown("snap".to_string())
        );
    }

    #[test]
    fn test_missing_method_keeps_catalog() {
        let yaml = r#"
categories:
  utilities:
    git:
      install_method: apt
    broken:
      display_name: Broken
"#;
        let config = ConfigParser::parse(yaml, ConfigFormat::Yaml).unwrap();
        let catalog = Catalog::from_config(config).unwrap();

        assert_eq!(catalog.get("git").unwrap().install_method, InstallMethod::Apt);
        assert_eq!(
            catalog.get("broken").unwrap().install_method,
            InstallMethod::Unknown(String::new())
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[categories.shell.zsh]
display_name = "Z Shell"
install_method = "apt"
package_name = "zsh"

[categories.shell.ohmyzsh]
install_method = "script"
install_script = "install_scripts/ohmyzsh.sh"
dependencies = ["zsh", "curl"]
"#;
        let config = ConfigParser::parse(toml_str, ConfigFormat::Toml).unwrap();
        let shell = &config.categories["shell"];
        assert_eq!(shell["ohmyzsh"].dependencies, vec!["zsh", "curl"]);
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ConfigParser::parse("categories: [", ConfigFormat::Yaml).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse YAML config"));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ConfigParser::detect_format(Path::new("config.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert!(matches!(
            ConfigParser::detect_format(Path::new("config.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(ConfigParser::detect_format(Path::new("config")).is_err());
    }

    #[test]
    fn test_find_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "categories:\n  utilities:\n    jq:\n      install_method: apt\n      package_name: jq"
        )
        .unwrap();

        let missing = dir.path().join("missing.yaml");
        let found = ConfigParser::find_config(&[missing.clone(), path.clone()]).unwrap();
        assert_eq!(found, path);

        let catalog = ConfigParser::load_catalog(&found).unwrap();
        assert!(catalog.contains("jq"));

        let err = ConfigParser::find_config(&[missing]).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
