//! Core domain concepts shared across the request lifecycle.
//!
//! - [`model::Model`] — Gemini model identifiers
//! - [`question::Question`] — a validated, non-blank prompt
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
