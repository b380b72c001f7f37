//! Date resolution for relative phrases and explicit literals.
//!
//! "Today" is always passed in by the caller so results are deterministic
//! under test; the parser never reads the wall clock itself.

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::models::Confidence;

const TODAY_KEYWORDS: &[&str] = &["hari ini", "today", "sekarang"];
const YESTERDAY_KEYWORDS: &[&str] = &["kemarin", "yesterday"];

// The leading \b keeps a 3-digit count from matching on its last two digits.
const DAYS_AGO_PATTERN: &str = r"\b(\d{1,2})\s*(?:hari|lusa)\s*(?:yang\s*)?lalu";
const LITERAL_PATTERN: &str = r"\b(\d{1,4})[/-](\d{1,2})[/-](\d{2,4})\b";

#[derive(Debug, Clone, Copy)]
pub(crate) struct DateMatch {
    pub date: NaiveDate,
    pub confidence: Confidence,
    /// Set when an explicit literal pointed into the future and was replaced
    /// by today.
    pub clamped: bool,
    /// Byte span of the recognized phrase, for description stripping.
    pub span: Option<(usize, usize)>,
}

impl DateMatch {
    fn new(date: NaiveDate, confidence: Confidence, span: Option<(usize, usize)>) -> Self {
        Self {
            date,
            confidence,
            clamped: false,
            span,
        }
    }
}

/// Resolve a transaction date from the text. Always yields a date (default:
/// today at low confidence) and never a date in the future.
pub(crate) fn resolve(text: &str, today: NaiveDate) -> DateMatch {
    for kw in TODAY_KEYWORDS {
        if let Some(pos) = text.find(kw) {
            return DateMatch::new(today, Confidence::High, Some((pos, pos + kw.len())));
        }
    }
    for kw in YESTERDAY_KEYWORDS {
        if let Some(pos) = text.find(kw) {
            return DateMatch::new(
                today - Duration::days(1),
                Confidence::High,
                Some((pos, pos + kw.len())),
            );
        }
    }
    if let Some(caps) = Regex::new(DAYS_AGO_PATTERN).unwrap().captures(text) {
        if let Ok(days) = caps[1].parse::<i64>() {
            if (1..=30).contains(&days) {
                let whole = caps.get(0).unwrap();
                return DateMatch::new(
                    today - Duration::days(days),
                    Confidence::Medium,
                    Some((whole.start(), whole.end())),
                );
            }
        }
    }
    if let Some(caps) = Regex::new(LITERAL_PATTERN).unwrap().captures(text) {
        if let Some(date) = parse_literal(&caps[1], &caps[2], &caps[3]) {
            let whole = caps.get(0).unwrap();
            let span = Some((whole.start(), whole.end()));
            if date > today {
                // Future dates are clamped, never rejected.
                return DateMatch {
                    date: today,
                    confidence: Confidence::Low,
                    clamped: true,
                    span,
                };
            }
            return DateMatch::new(date, Confidence::Medium, span);
        }
    }
    DateMatch::new(today, Confidence::Low, None)
}

/// `YYYY-MM-DD` when the first field has four digits, `DD/MM/YYYY` otherwise.
/// Two-digit years are taken as 2000-based.
fn parse_literal(first: &str, second: &str, third: &str) -> Option<NaiveDate> {
    let (year, month, day) = if first.len() == 4 {
        (first.parse().ok()?, second.parse().ok()?, third.parse().ok()?)
    } else {
        let mut year: i32 = third.parse().ok()?;
        if third.len() == 2 {
            year += 2000;
        }
        (year, second.parse().ok()?, first.parse().ok()?)
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
