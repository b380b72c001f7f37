//! Income/expense classification from ranked keyword tiers.

use crate::lexicon::{EXPENSE_HIGH, EXPENSE_MEDIUM, INCOME_HIGH, INCOME_MEDIUM};
use crate::models::{Confidence, TransactionType};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeMatch {
    pub transaction_type: TransactionType,
    pub confidence: Confidence,
    /// Keyword that decided the classification, for description stripping.
    pub keyword: Option<&'static str>,
}

/// Scan the tiers in fixed order: income-high, income-medium, expense-high,
/// expense-medium. First keyword hit wins at that tier. No signal at all
/// defaults to expense at low confidence, never `None` — casually logged
/// transactions are overwhelmingly expenses.
pub(crate) fn classify(text: &str) -> TypeMatch {
    let tiers: &[(&[&'static str], TransactionType, Confidence)] = &[
        (INCOME_HIGH, TransactionType::Income, Confidence::High),
        (INCOME_MEDIUM, TransactionType::Income, Confidence::Medium),
        (EXPENSE_HIGH, TransactionType::Expense, Confidence::High),
        (EXPENSE_MEDIUM, TransactionType::Expense, Confidence::Medium),
    ];
    for (keywords, transaction_type, confidence) in tiers {
        if let Some(keyword) = keywords.iter().find(|k| text.contains(*k)) {
            return TypeMatch {
                transaction_type: *transaction_type,
                confidence: *confidence,
                keyword: Some(keyword),
            };
        }
    }
    TypeMatch {
        transaction_type: TransactionType::Expense,
        confidence: Confidence::Low,
        keyword: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_lower(text: &str) -> TypeMatch {
        classify(&text.to_lowercase())
    }

    #[test]
    fn test_income_high_keywords() {
        let m = classify_lower("Gaji masuk 5 juta");
        assert_eq!(m.transaction_type, TransactionType::Income);
        assert_eq!(m.confidence, Confidence::High);
        assert_eq!(m.keyword, Some("gaji"));
    }

    #[test]
    fn test_income_medium_keywords() {
        let m = classify_lower("uang sudah masuk 200 ribu");
        assert_eq!(m.transaction_type, TransactionType::Income);
        assert_eq!(m.confidence, Confidence::Medium);
    }

    #[test]
    fn test_expense_high_keywords() {
        let m = classify_lower("Beli bakso 20 ribu");
        assert_eq!(m.transaction_type, TransactionType::Expense);
        assert_eq!(m.confidence, Confidence::High);
        assert_eq!(m.keyword, Some("beli"));
    }

    #[test]
    fn test_expense_medium_keywords() {
        let m = classify_lower("uang keluar 50 ribu");
        assert_eq!(m.transaction_type, TransactionType::Expense);
        assert_eq!(m.confidence, Confidence::Medium);
    }

    #[test]
    fn test_income_outranks_expense() {
        // Both "gaji" (income-high) and "bayar" (expense-high) appear;
        // income tiers are scanned first.
        let m = classify_lower("gaji dipakai bayar kos");
        assert_eq!(m.transaction_type, TransactionType::Income);
        assert_eq!(m.confidence, Confidence::High);
    }

    #[test]
    fn test_default_is_low_confidence_expense() {
        let m = classify_lower("asdkjasd");
        assert_eq!(m.transaction_type, TransactionType::Expense);
        assert_eq!(m.confidence, Confidence::Low);
        assert_eq!(m.keyword, None);
    }
}
