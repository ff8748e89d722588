use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::runtime::Handle;

use crate::commands::split;
use crate::config::{SplitConfig, DEFAULT_ZIP_NAME};
use crate::run::ProcessingResult;
use crate::sequence::NamingConfig;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfPlanRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Page ranges (e.g., '1-5,8,10-12'). Leading zeros in the first token set the number width, e.g. '01-05'")]
    pub ranges: String,
    #[schemars(description = "Comma-separated page numbers to leave out (e.g., '2,4')")]
    #[serde(default)]
    pub exclusions: String,
    #[schemars(description = "Text placed before the page number in each file name")]
    #[serde(default)]
    pub prefix: String,
    #[schemars(description = "Text placed after the page number in each file name")]
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[serde(flatten)]
    pub plan: PdfPlanRequest,
    #[schemars(description = "Archive base name without extension (default: 'split_files')")]
    #[serde(default = "default_zip_name")]
    pub zip_name: String,
    #[schemars(description = "Directory the ZIP archive is written to")]
    pub output_dir: String,
}

fn default_zip_name() -> String {
    DEFAULT_ZIP_NAME.to_string()
}

impl PdfPlanRequest {
    fn to_config(&self) -> SplitConfig {
        SplitConfig {
            file: Some(PathBuf::from(&self.path)),
            ranges: self.ranges.clone(),
            exclusions: self.exclusions.clone(),
            naming: NamingConfig {
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

// Runs are driven to completion on the current worker; the document is not
// moved between threads.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| Handle::current().block_on(future))
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Split a PDF into single-page PDFs and bundle them into a ZIP archive. Returns the archive path and one result per page.")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let mut config = req.plan.to_config();
        config.zip_name = req.zip_name;
        let output_dir = PathBuf::from(req.output_dir);

        match block_on(split::execute(&config, &output_dir)) {
            Ok(report) => {
                let result = SplitResult {
                    archive_path: report.archive_path.display().to_string(),
                    succeeded: report.succeeded(),
                    results: report.results,
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {:#}", e),
        }
    }

    #[tool(description = "Show the file names a split would produce, without extracting any pages")]
    fn pdf_split_plan(&self, Parameters(req): Parameters<PdfPlanRequest>) -> String {
        match block_on(split::plan(&req.to_config())) {
            Ok(plan) => {
                serde_json::to_string_pretty(&plan).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {:#}", e),
        }
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize)]
pub struct SplitResult {
    pub archive_path: String,
    pub succeeded: usize,
    pub results: Vec<ProcessingResult>,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting tools. Use pdf_split_plan to preview the output file names for a \
                 page range, and pdf_split to write the single-page PDFs into a ZIP archive."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
