use anyhow::Context;
use clap::Parser;
use doc_stub::utils::error::StubError;
use doc_stub::utils::logger;
use doc_stub::{CliConfig, LocalStorage, StubEngine, StubPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting doc-stub");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        // 依錯誤嚴重程度決定退出碼
        match e.downcast_ref::<StubError>() {
            Some(stub_error) => {
                tracing::error!(
                    "❌ Stub generation failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    stub_error.category(),
                    stub_error.severity()
                );
                eprintln!("❌ {}", stub_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", stub_error.recovery_suggestion());
                std::process::exit(stub_error.exit_code());
            }
            None => {
                tracing::error!("❌ Stub generation failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let dry_run = config.dry_run;
    let generator_config = config
        .into_generator_config()
        .context("failed to resolve configuration")?;

    tracing::info!(
        "Scanning {} for links, writing stubs under {}",
        generator_config.readme_path.display(),
        generator_config.docs_dir.display()
    );

    let pipeline = StubPipeline::new(LocalStorage::new(), generator_config);
    let engine = StubEngine::new(pipeline);

    let report = if dry_run {
        engine.dry_run()
    } else {
        engine.run()
    }
    .context("stub generation failed")?;

    for rejected in &report.rejected {
        eprintln!(
            "⚠️  Ignored link '{}' ({}): {}",
            rejected.entry.title, rejected.entry.path, rejected.reason
        );
    }

    println!("✅ Documentation stubs generated: {}", report.summary());
    Ok(())
}
