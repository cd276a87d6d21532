use crate::core::parser::{check_link_path, parse_link_entries};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    GenerationReport, LinkEntry, PlannedStub, RejectedEntry, StubPlan,
};
use crate::utils::error::Result;
use std::collections::HashSet;

pub struct StubPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> StubPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for StubPipeline<S, C> {
    fn prepare(&self) -> Result<()> {
        let docs_dir = self.config.docs_dir();
        tracing::debug!("Ensuring output directory: {}", docs_dir.display());
        self.storage.create_dir_all(docs_dir)
    }

    fn extract(&self) -> Result<Vec<LinkEntry>> {
        let readme_path = self.config.readme_path();
        tracing::debug!("Reading source document: {}", readme_path.display());

        let content = self.storage.read_to_string(readme_path)?;
        let entries = parse_link_entries(&content);

        tracing::debug!(
            "Found {} link entries in {}",
            entries.len(),
            readme_path.display()
        );
        Ok(entries)
    }

    fn plan(&self, entries: Vec<LinkEntry>) -> Result<StubPlan> {
        let docs_dir = self.config.docs_dir();
        let contain = self.config.contain_paths();
        let mut plan = StubPlan::default();
        let mut claimed = HashSet::new();

        for entry in entries {
            if let Some(reason) = check_link_path(&entry.path, contain) {
                tracing::warn!("Rejecting link '{}' ({}): {}", entry.title, entry.path, reason);
                plan.rejected.push(RejectedEntry { entry, reason });
                continue;
            }

            let target = docs_dir.join(&entry.path);

            // 同一目標重複出現時，只有第一筆會被建立
            if self.storage.exists(&target) || claimed.contains(&target) {
                tracing::debug!("Target already exists: {}", target.display());
                plan.skipped.push(target);
                continue;
            }

            claimed.insert(target.clone());
            plan.to_create.push(PlannedStub { entry, target });
        }

        Ok(plan)
    }

    fn write(&self, plan: StubPlan) -> Result<GenerationReport> {
        let template = self.config.template();
        let mut created = Vec::with_capacity(plan.to_create.len());

        for stub in plan.to_create {
            if let Some(parent) = stub.target.parent() {
                self.storage.create_dir_all(parent)?;
            }

            self.storage
                .write_new(&stub.target, &template.render(&stub.entry.title))?;
            tracing::debug!("Created stub: {}", stub.target.display());
            created.push(stub.target);
        }

        Ok(GenerationReport {
            created,
            skipped: plan.skipped,
            rejected: plan.rejected,
            dry_run: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StubTemplate;
    use crate::utils::error::StubError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<PathBuf, String>>,
        dirs: RefCell<Vec<PathBuf>>,
    }

    impl Storage for MemoryStorage {
        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| StubError::SourceReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                })
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.dirs.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn write_new(&self, path: &Path, contents: &str) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    struct TestConfig {
        readme: PathBuf,
        docs: PathBuf,
        template: StubTemplate,
        contain: bool,
    }

    impl ConfigProvider for TestConfig {
        fn readme_path(&self) -> &Path {
            &self.readme
        }

        fn docs_dir(&self) -> &Path {
            &self.docs
        }

        fn template(&self) -> &StubTemplate {
            &self.template
        }

        fn contain_paths(&self) -> bool {
            self.contain
        }
    }

    fn pipeline_with(readme: &str) -> StubPipeline<MemoryStorage, TestConfig> {
        let storage = MemoryStorage::default();
        storage
            .files
            .borrow_mut()
            .insert(PathBuf::from("README.md"), readme.to_string());
        StubPipeline::new(
            storage,
            TestConfig {
                readme: PathBuf::from("README.md"),
                docs: PathBuf::from("out"),
                template: StubTemplate::default(),
                contain: false,
            },
        )
    }

    #[test]
    fn test_plan_classifies_entries() {
        let pipeline = pipeline_with("");
        pipeline
            .storage
            .files
            .borrow_mut()
            .insert(PathBuf::from("out/existing.md"), "keep".to_string());

        let plan = pipeline
            .plan(vec![
                LinkEntry::new("New", "new.md"),
                LinkEntry::new("Existing", "existing.md"),
                LinkEntry::new("Absolute", "/abs.md"),
                LinkEntry::new("Sibling", "../shared/intro.md"),
                LinkEntry::new("Again", "new.md"),
            ])
            .unwrap();

        assert_eq!(plan.to_create.len(), 2);
        assert_eq!(plan.to_create[0].target, PathBuf::from("out/new.md"));
        assert_eq!(
            plan.to_create[1].target,
            PathBuf::from("out/../shared/intro.md")
        );
        assert_eq!(
            plan.skipped,
            vec![PathBuf::from("out/existing.md"), PathBuf::from("out/new.md")]
        );
        assert_eq!(plan.rejected.len(), 1);
        assert_eq!(plan.rejected[0].entry.title, "Absolute");
    }

    #[test]
    fn test_plan_rejects_parent_paths_when_contained() {
        let mut pipeline = pipeline_with("");
        pipeline.config.contain = true;

        let plan = pipeline
            .plan(vec![
                LinkEntry::new("Sibling", "../shared/intro.md"),
                LinkEntry::new("Inside", "guide/intro.md"),
            ])
            .unwrap();

        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_create[0].entry.title, "Inside");
        assert_eq!(plan.rejected.len(), 1);
        assert_eq!(plan.rejected[0].entry.title, "Sibling");
    }

    #[test]
    fn test_write_creates_parents_and_renders() {
        let pipeline = pipeline_with("3. [Deep](./a/b/c/deep.md)\n");
        let entries = pipeline.extract().unwrap();
        let plan = pipeline.plan(entries).unwrap();
        let report = pipeline.write(plan).unwrap();

        assert_eq!(report.created, vec![PathBuf::from("out/a/b/c/deep.md")]);
        assert!(pipeline
            .storage
            .dirs
            .borrow()
            .contains(&PathBuf::from("out/a/b/c")));
        assert_eq!(
            pipeline.storage.files.borrow()[&PathBuf::from("out/a/b/c/deep.md")],
            "# Deep\n\n## Content Summary\n\nPlease add detailed content here...\n"
        );
    }

    #[test]
    fn test_extract_propagates_read_errors() {
        let pipeline = StubPipeline::new(
            MemoryStorage::default(),
            TestConfig {
                readme: PathBuf::from("missing.md"),
                docs: PathBuf::from("out"),
                template: StubTemplate::default(),
                contain: false,
            },
        );
        assert!(matches!(
            pipeline.extract(),
            Err(StubError::SourceReadError { .. })
        ));
    }
}
