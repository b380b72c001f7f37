//! `catat` turns free-form Indonesian sentences like "Beli bakso hari ini
//! 20 ribu" into structured transaction drafts with per-field confidence,
//! so a UI can ask the user to double-check weak fields instead of silently
//! guessing.

pub mod cli;
pub mod error;
pub mod fmt;
pub mod lexicon;
pub mod models;
pub mod parser;
pub mod settings;

pub use error::{CatatError, Result};
pub use lexicon::Lexicon;
pub use models::{Confidence, FieldConfidence, ParseResult, TransactionDraft, TransactionType};
pub use parser::{parse, TextParser};
