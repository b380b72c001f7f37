//! Natural-language transaction parsing.
//!
//! One pass over one string: each extractor runs independently on the same
//! lower-cased copy, the orchestrator aggregates the per-field confidences
//! and turns recoverable ambiguity into warnings instead of failures. The
//! only blocking condition is an undetectable amount; the parser never
//! panics or errors on any input string.

pub mod amount;
pub mod category;
mod classify;
mod date;
mod description;

use chrono::{Local, NaiveDate};

use crate::lexicon::Lexicon;
use crate::models::{Confidence, FieldConfidence, ParseResult, TransactionDraft};

pub const EMPTY_INPUT_ERROR: &str = "Input is empty; nothing to parse";

/// Stateless parser bound to a keyword lexicon. Safe to share and call
/// concurrently; each parse touches nothing but its own input.
#[derive(Debug, Clone, Default)]
pub struct TextParser {
    lexicon: Lexicon,
}

/// Parse with the built-in lexicon and the local calendar date.
pub fn parse(text: &str) -> ParseResult {
    TextParser::default().parse(text)
}

impl TextParser {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        self.parse_on(text, Local::now().date_naive())
    }

    /// Parse with an injected "today", for deterministic date resolution.
    pub fn parse_on(&self, text: &str, today: NaiveDate) -> ParseResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ParseResult {
                success: false,
                errors: vec![EMPTY_INPUT_ERROR.to_string()],
                ..Default::default()
            };
        }
        let lowered = trimmed.to_lowercase();

        let amount_match = amount::extract_full(&lowered);
        let type_match = classify::classify(&lowered);
        let (category_name, category_confidence) =
            category::infer(&lowered, type_match.transaction_type, &self.lexicon);
        let date_match = date::resolve(&lowered, today);

        let amount_spans: Vec<(usize, usize)> = amount_match
            .as_ref()
            .map(|m| m.spans.clone())
            .unwrap_or_default();
        let description = description::extract(
            trimmed,
            &lowered,
            &amount_spans,
            date_match.span,
            type_match.keyword,
        );

        let confidence = FieldConfidence {
            amount: amount_match
                .as_ref()
                .map_or(Confidence::None, |m| m.confidence),
            transaction_type: type_match.confidence,
            category: category_confidence,
            date: date_match.confidence,
        };
        let amount_value = amount_match.as_ref().map(|m| m.value);

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        if confidence.amount == Confidence::None {
            errors.push(
                "Could not detect an amount in the text; please enter it manually".to_string(),
            );
        }
        if confidence.amount == Confidence::Low {
            warnings.push("Amount was inferred with low confidence; please verify".to_string());
        }
        if type_match.keyword.is_none() {
            warnings.push(format!(
                "No income/expense keyword found; assuming {}",
                type_match.transaction_type.label()
            ));
        }
        if matches!(confidence.category, Confidence::None | Confidence::Low) {
            warnings.push(format!(
                "No category keyword matched; defaulted to {category_name}"
            ));
        }
        if date_match.clamped {
            warnings.push("Date was in the future; using today instead".to_string());
        } else if confidence.date == Confidence::Low && date_match.span.is_none() {
            warnings.push("No date phrase found; using today".to_string());
        }
        if description.chars().count() < 3 {
            warnings.push("Description is very short; consider editing it".to_string());
        }

        let success = confidence.amount != Confidence::None
            && amount_value.unwrap_or(0) > 0
            && confidence.transaction_type != Confidence::None;

        ParseResult {
            success,
            data: TransactionDraft {
                transaction_type: Some(type_match.transaction_type),
                amount: amount_value,
                description: Some(description),
                category: Some(category_name),
                date: Some(date_match.date),
            },
            confidence,
            errors,
            warnings,
        }
    }
}
