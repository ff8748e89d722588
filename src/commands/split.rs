use crate::config::SplitConfig;
use crate::error::{SplitError, ValidationError};
use crate::pdf::PdfDocument;
use crate::run::{ProcessingResult, SplitPlan, SplitRun, PROGRESS_DONE, PROGRESS_LOADED};
use crate::sequence::validate;
use crate::size::{check_file_size, format_file_size};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct SplitOptions {
    pub config: SplitConfig,
    pub output_dir: PathBuf,
    pub json: bool,
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub archive_path: PathBuf,
    pub results: Vec<ProcessingResult>,
}

impl SplitReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }
}

pub async fn run(options: &SplitOptions) -> Result<()> {
    if options.dry_run {
        let plan = plan(&options.config).await?;
        if options.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            for file in &plan.files {
                println!("p{} -> {}", file.sequence_number, file.file_name);
            }
            println!("\n{} file(s) planned.", plan.len());
        }
        return Ok(());
    }

    let report = execute(&options.config, &options.output_dir).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for result in &report.results {
        match &result.error {
            None => println!("ok   {}", result.file_name),
            Some(error) => println!("FAIL {}: {}", result.file_name, error),
        }
    }
    println!(
        "\nSuccessfully processed {} of {} page(s) into {}",
        report.succeeded(),
        report.results.len(),
        report.archive_path.display()
    );

    Ok(())
}

/// Validate, read and resolve the input without extracting anything
pub async fn plan(config: &SplitConfig) -> Result<SplitPlan> {
    let doc = load(config).await?;
    Ok(SplitPlan::new(config, doc.page_count())?)
}

/// Split the configured PDF and write the archive into `output_dir`.
///
/// An archive left by an earlier run under the same name is replaced.
pub async fn execute(config: &SplitConfig, output_dir: &Path) -> Result<SplitReport> {
    let doc = load(config).await?;
    info!(progress = PROGRESS_LOADED, pages = doc.page_count(), "document loaded");

    let plan = SplitPlan::new(config, doc.page_count())?;
    info!(
        files = plan.len(),
        padding = plan.padding_length,
        "sequence planned"
    );

    let mut run = SplitRun::new(&doc, plan);
    while let Some(step) = run.next() {
        let result = step?;
        info!(
            progress = run.progress(),
            file = %result.file_name,
            success = result.success,
            "page processed"
        );
        tokio::task::yield_now().await;
    }
    let output = run.finish()?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;
    let archive_path = output_dir.join(config.archive_file_name());
    tokio::fs::write(&archive_path, &output.archive)
        .await
        .with_context(|| format!("Failed to write archive: {}", archive_path.display()))?;
    info!(
        progress = PROGRESS_DONE,
        path = %archive_path.display(),
        size = %format_file_size(output.archive.len() as u64),
        "archive written"
    );

    Ok(SplitReport {
        archive_path,
        results: output.results,
    })
}

async fn load(config: &SplitConfig) -> Result<PdfDocument> {
    validate(config).map_err(SplitError::from)?;
    let Some(path) = config.file.as_deref() else {
        return Err(SplitError::from(ValidationError::MissingFile).into());
    };

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
    check_file_size(metadata.len())?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read PDF: {}", path.display()))?;
    PdfDocument::from_bytes(&bytes).with_context(|| format!("Failed to open PDF: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixture::sample_pdf;
    use crate::sequence::NamingConfig;
    use std::io::Cursor;
    use zip::ZipArchive;

    fn write_sample(dir: &Path, pages: u32) -> PathBuf {
        let path = dir.join("input.pdf");
        std::fs::write(&path, sample_pdf(pages)).unwrap();
        path
    }

    fn config(path: PathBuf, ranges: &str) -> SplitConfig {
        SplitConfig {
            file: Some(path),
            ranges: ranges.to_string(),
            naming: NamingConfig {
                prefix: "p_".to_string(),
                suffix: String::new(),
            },
            zip_name: "out".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_execute_writes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 3);
        let output_dir = dir.path().join("nested");

        let report = execute(&config(input, "03,01-02"), &output_dir).await.unwrap();
        assert_eq!(report.archive_path, output_dir.join("out.zip"));
        assert_eq!(report.succeeded(), 3);

        let bytes = std::fs::read(&report.archive_path).unwrap();
        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<_> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["p_03.pdf", "p_01.pdf", "p_02.pdf"]);
    }

    #[tokio::test]
    async fn test_rerun_replaces_archive() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 3);

        execute(&config(input.clone(), "1-3"), dir.path()).await.unwrap();
        let report = execute(&config(input, "2"), dir.path()).await.unwrap();

        let bytes = std::fs::read(&report.archive_path).unwrap();
        let zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.file_names().collect::<Vec<_>>(), vec!["p_2.pdf"]);
    }

    #[tokio::test]
    async fn test_insufficient_pages_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 5);
        let output_dir = dir.path().join("out");

        let err = execute(&config(input, "1-10"), &output_dir).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::InsufficientPages { .. })
        ));
        assert!(!output_dir.exists());
    }

    #[tokio::test]
    async fn test_missing_file_reported_by_validator() {
        let mut cfg = config(PathBuf::new(), "1");
        cfg.file = None;
        let err = plan(&cfg).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::Validation(ValidationError::MissingFile))
        ));
    }

    #[tokio::test]
    async fn test_plan_does_not_extract() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 12);

        let plan = plan(&config(input, "9-11,1")).await.unwrap();
        let names: Vec<_> = plan.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["p_09.pdf", "p_10.pdf", "p_11.pdf", "p_01.pdf"]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
