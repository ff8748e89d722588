//! One split run: plan the output names, then walk the pages one at a time.
//!
//! [`SplitRun`] is an iterator so the caller decides what happens between
//! pages (progress logging, yielding to the runtime). Nothing is shared with
//! other runs.

use crate::archive::ArchiveBuilder;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::pdf::PdfDocument;
use crate::sequence::{build_file_name, build_sequence, highest_page, padding_length, validate};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome for one entry of the sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub file_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedPage {
    pub sequence_number: u32,
    pub file_name: String,
}

/// Names and order of every page a run will produce, fixed before extraction begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    pub padding_length: usize,
    pub files: Vec<PlannedPage>,
}

impl SplitPlan {
    /// Validate the input and resolve it against a document with `page_count` pages.
    ///
    /// Every bound is checked here, so a run that starts never aborts for a
    /// missing page.
    pub fn new(config: &SplitConfig, page_count: u32) -> Result<Self, SplitError> {
        validate(config)?;

        // Bound check before expansion, so "1-4000000000" fails fast
        let Some(highest) = highest_page(&config.ranges, &config.exclusions)? else {
            return Err(SplitError::EmptySequence);
        };
        if highest > page_count {
            return Err(SplitError::InsufficientPages {
                highest,
                page_count,
            });
        }

        let sequence = build_sequence(&config.ranges, &config.exclusions)?;

        let padding = padding_length(&sequence, &config.ranges);
        let files = sequence
            .into_iter()
            .map(|n| PlannedPage {
                sequence_number: n,
                file_name: build_file_name(&config.naming, n, padding),
            })
            .collect();

        Ok(SplitPlan {
            padding_length: padding,
            files,
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SplitOutput {
    pub results: Vec<ProcessingResult>,
    pub archive: Vec<u8>,
}

// Progress milestones, in percent.
pub const PROGRESS_LOADED: f32 = 10.0;
const PLANNED: f32 = 20.0;
const PAGES_SHARE: f32 = 70.0;
const COLLECTED: f32 = 90.0;
pub const PROGRESS_DONE: f32 = 100.0;

/// Per-page extraction over a planned run
pub struct SplitRun<'a> {
    doc: &'a PdfDocument,
    plan: SplitPlan,
    next: usize,
    archive: ArchiveBuilder,
    results: Vec<ProcessingResult>,
}

impl<'a> SplitRun<'a> {
    pub fn new(doc: &'a PdfDocument, plan: SplitPlan) -> Self {
        SplitRun {
            doc,
            next: 0,
            archive: ArchiveBuilder::new(),
            results: Vec::with_capacity(plan.len()),
            plan,
        }
    }

    /// Percent complete; 90 once every page has been visited, 100 only after [`finish`](Self::finish)
    pub fn progress(&self) -> f32 {
        if self.plan.is_empty() {
            return PLANNED;
        }
        if self.next == self.plan.len() {
            return COLLECTED;
        }
        PLANNED + (self.next as f32 / self.plan.len() as f32) * PAGES_SHARE
    }

    /// Serialize the archive. Pages not yet visited are skipped.
    pub fn finish(self) -> Result<SplitOutput, SplitError> {
        let entries = self.archive.len();
        let archive = self.archive.finish()?;
        info!(
            entries,
            bytes = archive.len(),
            "archive ready"
        );
        Ok(SplitOutput {
            results: self.results,
            archive,
        })
    }

    fn step(&mut self, index: usize) -> Result<ProcessingResult, SplitError> {
        let PlannedPage {
            sequence_number,
            file_name,
        } = &self.plan.files[index];

        let result = match self.doc.extract_page(*sequence_number) {
            Ok(bytes) => {
                self.archive.add(file_name, &bytes)?;
                debug!(page = sequence_number, file = %file_name, "page extracted");
                ProcessingResult {
                    file_name: file_name.clone(),
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!(page = sequence_number, file = %file_name, error = %e, "page failed");
                ProcessingResult {
                    file_name: file_name.clone(),
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        };

        self.results.push(result.clone());
        Ok(result)
    }
}

impl Iterator for SplitRun<'_> {
    type Item = Result<ProcessingResult, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.plan.len() {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.step(index))
    }
}
