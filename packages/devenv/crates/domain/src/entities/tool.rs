use serde::{Deserialize, Serialize};
use std::fmt;

/// How a tool gets onto the machine.
///
/// Configuration files carry the method as a plain string tag. Tags outside
/// the known set are kept as `Unknown` so a single bad entry fails that tool
/// at install time instead of rejecting the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstallMethod {
    Apt,
    Script,
    Manual,
    Unknown(String),
}

impl InstallMethod {
    pub fn as_str(&self) -> &str {
        match self {
            InstallMethod::Apt => "apt",
            InstallMethod::Script => "script",
            InstallMethod::Manual => "manual",
            InstallMethod::Unknown(tag) => tag,
        }
    }
}

/// A missing tag behaves like an unrecognised one.
impl Default for InstallMethod {
    fn default() -> Self {
        InstallMethod::Unknown(String::new())
    }
}

impl From<String> for InstallMethod {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "apt" => InstallMethod::Apt,
            "script" => InstallMethod::Script,
            "manual" => InstallMethod::Manual,
            _ => InstallMethod::Unknown(tag),
        }
    }
}

impl From<&str> for InstallMethod {
    fn from(tag: &str) -> Self {
        InstallMethod::from(tag.to_string())
    }
}

impl From<InstallMethod> for String {
    fn from(method: InstallMethod) -> Self {
        match method {
            InstallMethod::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One installable unit of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Catalog key. Filled in from the mapping key when the catalog is built.
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub binary_name: String,
    #[serde(default)]
    pub install_method: InstallMethod,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub install_script: String,
    #[serde(default, alias = "wsl_notes")]
    pub notes: String,
    #[serde(default)]
    pub dependencies: Vec<String>,

    // Informational only, surfaced by `status` and `list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_install_steps: Vec<String>,
}

impl ToolDescriptor {
    pub fn new(id: &str, install_method: impl Into<InstallMethod>) -> Self {
        Self {
            id: id.to_string(),
            display_name: String::new(),
            binary_name: String::new(),
            install_method: install_method.into(),
            package_name: String::new(),
            install_script: String::new(),
            notes: String::new(),
            dependencies: Vec::new(),
            config_path: None,
            version: None,
            validate_command: None,
            post_install_steps: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = name.to_string();
        self
    }

    pub fn with_binary(mut self, binary: &str) -> Self {
        self.binary_name = binary.to_string();
        self
    }

    pub fn with_package(mut self, package: &str) -> Self {
        self.package_name = package.to_string();
        self
    }

    pub fn with_script(mut self, script: &str) -> Self {
        self.install_script = script.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Human label, falling back to the catalog id.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }

    /// Executable looked up on `PATH`, falling back to the catalog id.
    pub fn binary(&self) -> &str {
        if self.binary_name.is_empty() {
            &self.id
        } else {
            &self.binary_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_tags() {
        assert_eq!(InstallMethod::from("apt"), InstallMethod::Apt);
        assert_eq!(InstallMethod::from("script"), InstallMethod::Script);
        assert_eq!(InstallMethod::from("manual"), InstallMethod::Manual);
        assert_eq!(
            InstallMethod::from("snap"),
            InstallMethod::Unknown("snap".to_string())
        );
        assert_eq!(String::from(InstallMethod::Unknown("snap".into())), "snap");
    }

    #[test]
    fn test_descriptor_from_yaml() {
        let yaml = r#"
display_name: Git Version Control
binary_name: git
install_method: apt
package_name: git
wsl_notes: works out of the box
"#;
        let tool: ToolDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tool.install_method, InstallMethod::Apt);
        assert_eq!(tool.notes, "works out of the box");
        assert!(tool.dependencies.is_empty());
        assert!(tool.id.is_empty());
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let tool = ToolDescriptor::new("jq", "apt");
        assert_eq!(tool.label(), "jq");
        assert_eq!(tool.binary(), "jq");

        let tool = tool.with_display_name("JSON Processor").with_binary("jq1");
        assert_eq!(tool.label(), "JSON Processor");
        assert_eq!(tool.binary(), "jq1");
    }
}
