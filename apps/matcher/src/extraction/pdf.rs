use tracing::debug;

use crate::extraction::ExtractError;

/// Extracts text page by page and concatenates it in page order.
///
/// Image-only pages come back from `pdf-extract` as empty strings and
/// contribute nothing; they are not an error.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let blank_pages = pages.iter().filter(|p| p.trim().is_empty()).count();
    if blank_pages > 0 {
        debug!(
            pages = pages.len(),
            blank_pages, "PDF has pages without extractable text"
        );
    }

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}
