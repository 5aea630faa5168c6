use async_trait::async_trait;
use socialyze::errors::{ExtractError, GenerationError, StoreError};
use socialyze::extract::OcrEngine;
use socialyze::providers::ai::AiProvider;
use socialyze::providers::db::{DocumentRecord, DocumentStore};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// --- Mock AI Provider ---

/// What the mock provider does when called.
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    Fail(String),
    /// Sleeps before answering, for timeout tests.
    Delayed(Duration, String),
}

/// An `AiProvider` that replays queued replies and records every call.
///
/// Once the queue is empty every call fails, which exercises the fallback path.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that answers once with `response`.
    pub fn with_response(response: &str) -> Self {
        let provider = Self::new();
        provider.push(MockReply::Text(response.to_string()));
        provider
    }

    pub fn push(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Retrieves the recorded `(system_prompt, user_prompt)` calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Delayed(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(MockReply::Fail(message)) => Err(GenerationError::AiApi(message)),
            None => Err(GenerationError::AiApi(
                "MockAiProvider: no response programmed".to_string(),
            )),
        }
    }
}

// --- OCR doubles ---

/// An OCR engine that returns fixed text, or fails when built with [`StaticOcr::failing`].
#[derive(Clone, Debug)]
pub struct StaticOcr {
    result: Result<String, String>,
}

impl StaticOcr {
    pub fn returning(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl OcrEngine for StaticOcr {
    async fn recognize(&self, _image_path: &Path) -> Result<String, ExtractError> {
        self.result.clone().map_err(ExtractError::Ocr)
    }
}

// --- Document store doubles ---

/// Keeps saved records in memory. Fails every write when built with [`RecordingStore::failing`].
#[derive(Clone, Debug, Default)]
pub struct RecordingStore {
    records: Arc<Mutex<Vec<DocumentRecord>>>,
    fail: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<DocumentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn save(&self, record: &DocumentRecord) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Connection("RecordingStore: writes disabled".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

// --- Test-Specific Helpers ---
pub mod helpers {
    use anyhow::Result;
    use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

    /// One text-showing operation on a page.
    #[derive(Clone, Copy, Debug)]
    pub enum TextRun<'a> {
        /// A single `Tj` string.
        Show(&'a str),
        /// A `TJ` array whose strings are separated by kerning adjustments.
        Kerned(&'a [&'a str]),
    }

    /// Generates a PDF with one page per entry in `pages`, each showing its text
    /// in a single Helvetica run.
    pub fn generate_test_pdf(pages: &[&str]) -> Result<Vec<u8>> {
        let runs: Vec<[TextRun; 1]> = pages.iter().map(|text| [TextRun::Show(*text)]).collect();
        let pages: Vec<&[TextRun]> = runs.iter().map(|page| page.as_slice()).collect();
        generate_pdf_with_runs(&pages)
    }

    /// Generates a PDF whose pages each carry the given sequence of text runs.
    pub fn generate_pdf_with_runs(pages: &[&[TextRun]]) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let font_name = Name(b"F1");

        let page_ids: Vec<Ref> = (0..pages.len())
            .map(|i| Ref::new(10 + 2 * i as i32))
            .collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(pages.len() as i32);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        for (page_id, runs) in page_ids.iter().zip(pages) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(font_name, font_id);
            page.finish();

            let mut content = Content::new();
            content.begin_text();
            content.set_font(font_name, 14.0);
            content.next_line(108.0, 734.0);
            for run in runs.iter() {
                match run {
                    TextRun::Show(text) => {
                        content.show(Str(text.as_bytes()));
                    }
                    TextRun::Kerned(parts) => {
                        let mut positioned = content.show_positioned();
                        let mut items = positioned.items();
                        for (i, part) in parts.iter().enumerate() {
                            if i > 0 {
                                items.adjust(-100.0);
                            }
                            items.show(Str(part.as_bytes()));
                        }
                    }
                }
            }
            content.end_text();
            pdf.stream(content_id, &content.finish());
        }

        Ok(pdf.finish())
    }
}
