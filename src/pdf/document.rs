use crate::error::{PageError, SplitError};
use lopdf::{Document, ObjectId};
use tracing::debug;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SplitError> {
        let doc = Document::load_mem(bytes).map_err(SplitError::Load)?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Copy the 1-based physical `page` into a new single-page PDF and serialize it
    pub fn extract_page(&self, page: u32) -> Result<Vec<u8>, PageError> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PageError::OutOfBounds { page, page_count });
        }

        let others: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|&num| num != page)
            .collect();

        let mut single = self.doc.clone();
        if !others.is_empty() {
            single.delete_pages(&others);
        }
        let pruned = single.prune_objects();
        single.compress();
        debug!(page, pruned = pruned.len(), "copied page into new document");

        let mut buffer = Vec::new();
        single
            .save_to(&mut buffer)
            .map_err(|source| PageError::Save { page, source: lopdf::Error::IO(source) })?;
        Ok(buffer)
    }
}
