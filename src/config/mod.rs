pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::StubTemplate;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_README_PATH: &str = "README.md";

/// 合併 CLI、TOML 與預設值後的最終配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub readme_path: PathBuf,
    pub docs_dir: PathBuf,
    pub template: StubTemplate,
    pub contain_paths: bool,
}

impl GeneratorConfig {
    pub fn new(readme_path: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            readme_path: readme_path.into(),
            docs_dir: docs_dir.into(),
            template: StubTemplate::default(),
            contain_paths: false,
        }
    }

    pub fn with_template(mut self, template: StubTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_contain_paths(mut self, contain: bool) -> Self {
        self.contain_paths = contain;
        self
    }

    /// 優先順序：CLI > TOML > 預設值。未指定輸出目錄時使用 README 所在目錄
    pub fn resolve(
        readme_path: Option<String>,
        docs_dir: Option<String>,
        contain: bool,
        file_config: Option<&TomlConfig>,
    ) -> Self {
        let readme_path = readme_path
            .or_else(|| file_config.and_then(|c| c.source.readme_path.clone()))
            .unwrap_or_else(|| DEFAULT_README_PATH.to_string());
        let readme_path = PathBuf::from(readme_path);

        let docs_dir = docs_dir
            .or_else(|| file_config.and_then(|c| c.output.docs_dir.clone()))
            .map(PathBuf::from)
            .unwrap_or_else(|| readme_parent(&readme_path));

        let template = file_config
            .map(TomlConfig::stub_template)
            .unwrap_or_default();

        // 旗標只能開啟，不能關閉配置檔中的設定
        let contain_paths = contain || file_config.and_then(|c| c.output.contain).unwrap_or(false);

        Self {
            readme_path,
            docs_dir,
            template,
            contain_paths,
        }
    }
}

fn readme_parent(readme_path: &Path) -> PathBuf {
    match readme_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

impl ConfigProvider for GeneratorConfig {
    fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    fn template(&self) -> &StubTemplate {
        &self.template
    }

    fn contain_paths(&self) -> bool {
        self.contain_paths
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("readme_path", &self.readme_path.to_string_lossy())?;
        validation::validate_path("docs_dir", &self.docs_dir.to_string_lossy())?;
        validation::validate_single_line(
            "template.summary_heading",
            &self.template.summary_heading,
        )?;
        validation::validate_single_line("template.placeholder", &self.template.placeholder)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "doc-stub")]
#[command(about = "Create stub documents for the numbered links listed in a README")]
pub struct CliConfig {
    /// Source document to scan for numbered links
    #[arg(short, long)]
    pub readme: Option<String>,

    /// Directory the link paths are resolved against (defaults to the README's directory)
    #[arg(short, long)]
    pub docs_dir: Option<String>,

    /// Reject link paths that use `..` to leave the docs directory
    #[arg(long)]
    pub contain: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn into_generator_config(self) -> Result<GeneratorConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let config = GeneratorConfig::resolve(
            self.readme,
            self.docs_dir,
            self.contain,
            file_config.as_ref(),
        );
        config.validate()?;
        Ok(config)
    }
}
