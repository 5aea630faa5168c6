use crate::{constants::OCR_LANGUAGE, errors::ExtractError, extract::OcrEngine};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Runs the `tesseract` command-line tool against an image file.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    /// Creates an engine using the `tesseract` binary on `PATH` and the fixed language.
    pub fn new() -> Self {
        Self::with_binary("tesseract")
    }

    /// Creates an engine that invokes a specific binary.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: OCR_LANGUAGE.to_string(),
        }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image_path: &Path) -> Result<String, ExtractError> {
        debug!(binary = %self.binary, path = ?image_path, "Running OCR");
        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .await
            .map_err(|e| ExtractError::Ocr(format!("failed to run {}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Ocr(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!("OCR extracted {} characters", text.len());
        Ok(text)
    }
}
