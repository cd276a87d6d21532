use crate::domain::model::{GenerationReport, LinkEntry, StubPlan, StubTemplate};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// 僅在檔案不存在時建立；已存在則回傳錯誤，絕不覆寫
    fn write_new(&self, path: &Path, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn readme_path(&self) -> &Path;
    fn docs_dir(&self) -> &Path;
    fn template(&self) -> &StubTemplate;
    /// 為 true 時拒絕含 `..` 的連結路徑
    fn contain_paths(&self) -> bool;
}

pub trait Pipeline {
    fn prepare(&self) -> Result<()>;
    fn extract(&self) -> Result<Vec<LinkEntry>>;
    fn plan(&self, entries: Vec<LinkEntry>) -> Result<StubPlan>;
    fn write(&self, plan: StubPlan) -> Result<GenerationReport>;
}
