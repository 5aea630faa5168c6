//! Page-oriented text extraction for PDF documents, built on the `pdf` crate.

use crate::{errors::ExtractError, types::ExtractionResult};
use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;

/// Extracts the text of every page, in order.
///
/// Text runs within a page are joined by single spaces and pages are separated
/// by a blank line. Trailing whitespace is trimmed.
pub fn extract_pdf_text(pdf_data: &[u8]) -> Result<ExtractionResult, ExtractError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
    let resolver = file.resolver();
    let page_count = file.num_pages();
    let mut full_text = String::new();

    for page_num in 0..page_count {
        let page = file
            .get_page(page_num)
            .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
        let mut runs: Vec<String> = Vec::new();
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
            for op in operations.iter() {
                match op {
                    Op::TextDraw { text } => runs.push(text.to_string_lossy().to_string()),
                    Op::TextDrawAdjusted { array } => {
                        let joined: String = array
                            .iter()
                            .filter_map(|item| match item {
                                TextDrawAdjusted::Text(text) => Some(text.to_string_lossy().to_string()),
                                _ => None,
                            })
                            .collect();
                        runs.push(joined);
                    }
                    _ => {}
                }
            }
        }
        full_text.push_str(&runs.join(" "));
        full_text.push_str("\n\n");
    }

    Ok(ExtractionResult {
        text: full_text.trim_end().to_string(),
        page_count: Some(page_count),
    })
}
