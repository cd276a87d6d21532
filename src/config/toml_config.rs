use crate::domain::model::{StubTemplate, DEFAULT_PLACEHOLDER, DEFAULT_SUMMARY_HEADING};
use crate::utils::error::{Result, StubError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub readme_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub docs_dir: Option<String>,
    pub contain: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub summary_heading: Option<String>,
    pub placeholder: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StubError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StubError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCS_ROOT})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn stub_template(&self) -> StubTemplate {
        StubTemplate {
            summary_heading: self
                .template
                .summary_heading
                .clone()
                .unwrap_or_else(|| DEFAULT_SUMMARY_HEADING.to_string()),
            placeholder: self
                .template
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.source.readme_path {
            validation::validate_path("source.readme_path", path)?;
        }
        if let Some(path) = &self.output.docs_dir {
            validation::validate_path("output.docs_dir", path)?;
        }
        if let Some(heading) = &self.template.summary_heading {
            validation::validate_single_line("template.summary_heading", heading)?;
        }
        if let Some(placeholder) = &self.template.placeholder {
            validation::validate_single_line("template.placeholder", placeholder)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
readme_path = "guide/README.md"

[output]
docs_dir = "guide"
contain = true

[template]
summary_heading = "Overview"
placeholder = "TODO: write this page"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.readme_path.as_deref(), Some("guide/README.md"));
        assert_eq!(config.output.docs_dir.as_deref(), Some("guide"));
        assert_eq!(config.output.contain, Some(true));
        let template = config.stub_template();
        assert_eq!(template.summary_heading, "Overview");
        assert_eq!(template.placeholder, "TODO: write this page");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.readme_path.is_none());
        assert_eq!(config.stub_template(), StubTemplate::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DOC_STUB_TEST_DOCS_DIR", "/tmp/doc-stub-docs");

        let toml_content = r#"
[output]
docs_dir = "${DOC_STUB_TEST_DOCS_DIR}"

[source]
readme_path = "${DOC_STUB_TEST_UNSET_VAR}/README.md"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.docs_dir.as_deref(), Some("/tmp/doc-stub-docs"));
        assert_eq!(
            config.source.readme_path.as_deref(),
            Some("${DOC_STUB_TEST_UNSET_VAR}/README.md")
        );

        std::env::remove_var("DOC_STUB_TEST_DOCS_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[template]
placeholder = "   "
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[output]
docs_dir = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[source\nreadme_path = 1").unwrap_err();
        assert!(matches!(err, StubError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nreadme_path = \"docs/README.md\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.readme_path.as_deref(), Some("docs/README.md"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = TomlConfig::from_file("/nonexistent/doc-stub.toml").unwrap_err();
        assert!(matches!(err, StubError::ConfigError { .. }));
    }
}
