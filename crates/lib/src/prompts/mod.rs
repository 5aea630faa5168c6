//! # Prompt Template Modules
//!
//! All prompt text sent to the generation service lives here.

pub mod suggestions;
