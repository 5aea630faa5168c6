//! # API Route Handlers

pub mod general;
pub mod upload;

pub use general::*;
pub use upload::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
