use crate::core::Pipeline;
use crate::domain::model::{skip_notice, GenerationReport};
use crate::utils::error::Result;

pub struct StubEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StubEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Starting stub generation");

        self.pipeline.prepare()?;

        let entries = self.pipeline.extract()?;
        tracing::info!("Extracted {} link entries", entries.len());

        let plan = self.pipeline.plan(entries)?;
        for skipped in &plan.skipped {
            println!("{}", skip_notice(skipped));
        }

        let report = self.pipeline.write(plan)?;
        for created in &report.created {
            tracing::info!("📄 Created {}", created.display());
        }
        tracing::info!("Stub generation finished: {}", report.summary());

        Ok(report)
    }

    /// 只規劃不寫入，輸出目錄也不會被建立
    pub fn dry_run(&self) -> Result<GenerationReport> {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");

        let entries = self.pipeline.extract()?;
        let plan = self.pipeline.plan(entries)?;

        for skipped in &plan.skipped {
            println!("{}", skip_notice(skipped));
        }
        for stub in &plan.to_create {
            println!("Would create: {} ({})", stub.target.display(), stub.entry.title);
        }

        Ok(GenerationReport {
            created: plan.to_create.into_iter().map(|stub| stub.target).collect(),
            skipped: plan.skipped,
            rejected: plan.rejected,
            dry_run: true,
        })
    }
}
