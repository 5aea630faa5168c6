//! # Shared Constants

/// The Gemini model used when a configuration does not name one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// The default path for the document store database.
pub const DEFAULT_DB_FILE: &str = "db/socialyze.db";

/// Maximum number of characters of extracted text kept in a stored document record.
pub const TEXT_PREVIEW_CHARS: usize = 5000;

/// Language passed to the OCR engine.
pub const OCR_LANGUAGE: &str = "eng";

/// Upper bound on hashtags reported in the analysis metadata.
pub const MAX_HASHTAGS: usize = 10;

/// Character budgets for the fallback captions.
pub const INSTAGRAM_CAPTION_CHARS: usize = 220;
pub const LINKEDIN_CAPTION_CHARS: usize = 130;
