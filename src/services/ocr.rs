//! OCR engine abstraction and Tesseract backend
//!
//! The scan pipeline only needs "text out of an image file", so the engine
//! sits behind a trait: production wires in the Tesseract CLI, tests inject
//! scripted engines.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Tesseract command name
const TESSERACT_COMMAND: &str = "tesseract";

/// OCR errors
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("tesseract is not installed")]
    NotAvailable,

    #[error("failed to run OCR: {0}")]
    Io(std::io::Error),

    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Text-from-image capability
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in the image at `image_path`.
    async fn recognize(&self, image_path: &Path) -> Result<String, OcrError>;
}

/// Tesseract-backed OCR engine
///
/// Shells out to the `tesseract` CLI and reads the recognized text from
/// stdout. The recognition language is configurable (default English).
pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(language: &str) -> Self {
        Self {
            command: TESSERACT_COMMAND.to_string(),
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image_path: &Path) -> Result<String, OcrError> {
        debug!(
            image = %image_path.display(),
            language = %self.language,
            "running tesseract"
        );

        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    OcrError::NotAvailable
                } else {
                    OcrError::Io(err)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
