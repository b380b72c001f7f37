//! Category inference from per-type keyword tables.

use crate::lexicon::Lexicon;
use crate::models::{Confidence, TransactionType};

/// First category whose keyword list matches wins at high confidence.
/// No match falls back to the type-specific default at low confidence.
/// Expects lower-cased text, like the other extractors.
pub fn infer(text: &str, transaction_type: TransactionType, lexicon: &Lexicon) -> (String, Confidence) {
    let (table, default) = match transaction_type {
        TransactionType::Income => (&lexicon.income_categories, &lexicon.default_income_category),
        TransactionType::Expense => (
            &lexicon.expense_categories,
            &lexicon.default_expense_category,
        ),
    };
    for (name, keywords) in table {
        if keywords.iter().any(|k| text.contains(k.as_str())) {
            return (name.clone(), Confidence::High);
        }
    }
    (default.clone(), Confidence::Low)
}
