use std::path::{Path, PathBuf};

pub const DEFAULT_SUMMARY_HEADING: &str = "Content Summary";
pub const DEFAULT_PLACEHOLDER: &str = "Please add detailed content here...";

/// README 中一筆編號連結：`1. [Title](./relative/path)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: String,
    pub path: String,
}

impl LinkEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    pub summary_heading: String,
    pub placeholder: String,
}

impl Default for StubTemplate {
    fn default() -> Self {
        Self {
            summary_heading: DEFAULT_SUMMARY_HEADING.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl StubTemplate {
    pub fn render(&self, title: &str) -> String {
        format!(
            "# {}\n\n## {}\n\n{}\n",
            title, self.summary_heading, self.placeholder
        )
    }
}

/// 目標檔案已存在時輸出到主控台的提示
pub fn skip_notice(path: &Path) -> String {
    format!("File already exists, skipping: {}", path.display())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStub {
    pub entry: LinkEntry,
    pub target: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub entry: LinkEntry,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct StubPlan {
    pub to_create: Vec<PlannedStub>,
    pub skipped: Vec<PathBuf>,
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub rejected: Vec<RejectedEntry>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn skip_notices(&self) -> Vec<String> {
        self.skipped.iter().map(|path| skip_notice(path)).collect()
    }

    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would create" } else { "created" };
        format!(
            "{} {} stub(s), skipped {} existing, rejected {}",
            verb,
            self.created.len(),
            self.skipped.len(),
            self.rejected.len()
        )
    }
}
