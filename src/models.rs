use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Qualitative reliability of an extracted field. Ordered: None < Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// The partially- or fully-recovered transaction a parse produces.
/// Absent fields are signaled by a `None` tier in [`FieldConfidence`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldConfidence {
    pub amount: Confidence,
    #[serde(rename = "type")]
    pub transaction_type: Confidence,
    pub category: Confidence,
    pub date: Confidence,
}

impl Default for FieldConfidence {
    fn default() -> Self {
        Self {
            amount: Confidence::None,
            transaction_type: Confidence::None,
            category: Confidence::None,
            date: Confidence::None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    pub data: TransactionDraft,
    pub confidence: FieldConfidence,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
        assert!(Confidence::Low > Confidence::None);
    }

    #[test]
    fn test_draft_serializes_with_renamed_type() {
        let draft = TransactionDraft {
            transaction_type: Some(TransactionType::Expense),
            amount: Some(20000),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""type":"expense""#));
        assert!(json.contains(r#""amount":20000"#));
        assert!(!json.contains("category"));
    }

    #[test]
    fn test_default_confidence_is_all_none() {
        let c = FieldConfidence::default();
        assert_eq!(c.amount, Confidence::None);
        assert_eq!(c.date, Confidence::None);
    }
}
