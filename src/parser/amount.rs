//! Amount extraction: an ordered table of candidate strategies, first hit wins.
//!
//! Indonesian amounts arrive in competing notations (multiplier words like
//! "20 ribu"/"1,5 jt", grouped currency digits like "Rp 20.000", bare digit
//! runs) so each notation gets its own strategy and the table encodes the
//! priority between them.

use regex::Regex;

use crate::lexicon::CONTEXT_VERBS;
use crate::models::Confidence;

/// Upper bound for any single amount: 10 billion Rupiah.
pub const MAX_AMOUNT: u64 = 10_000_000_000;

/// Grouped/bare digit amounts below this are noise (a lone "500" is more
/// likely a quantity than a price written in full).
pub const MIN_PLAIN_AMOUNT: u64 = 1_000;

const MULTIPLIER_PATTERN: &str =
    r"(\d+(?:[.,]\d+)?)\s*(ribu|rb|k|juta|jt|m|milyar|miliar|b)\b";
const GROUPED_PATTERN: &str = r"\b\d{1,3}(?:[.,]\d{3})+(?:[.,]\d{2})?\b";
// "rp" glued to the digits defeats the word boundary above, so prefixed
// amounts get their own pattern (grouping optional: "rp20000" counts too).
const RP_PREFIXED_PATTERN: &str = r"\brp\.?\s*\d+(?:[.,]\d{3})*(?:[.,]\d{2})?";

/// A resolved candidate plus the byte span it occupied in the (lower-cased)
/// input, so the description extractor can strip it later.
#[derive(Debug, Clone)]
struct Hit {
    start: usize,
    end: usize,
    value: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct AmountMatch {
    pub value: u64,
    pub confidence: Confidence,
    pub spans: Vec<(usize, usize)>,
}

/// Extract the most likely amount. `(0, Confidence::None)` when nothing
/// usable is found; never an error.
pub fn extract(text: &str) -> (u64, Confidence) {
    match extract_full(&text.to_lowercase()) {
        Some(m) => (m.value, m.confidence),
        None => (0, Confidence::None),
    }
}

/// Expects lower-cased text; spans refer to it.
pub(crate) fn extract_full(text: &str) -> Option<AmountMatch> {
    let strategies: &[fn(&str) -> Option<AmountMatch>] = &[
        compound_multipliers,
        single_multiplier,
        grouped_currency,
        bare_large_integer,
        contextual_small_integer,
    ];
    strategies.iter().find_map(|strategy| strategy(text))
}

fn in_range(value: u64) -> bool {
    value > 0 && value <= MAX_AMOUNT
}

/// All `<number> <multiplier-word>` occurrences with resolvable values.
fn multiplier_hits(text: &str) -> Vec<Hit> {
    let re = Regex::new(MULTIPLIER_PATTERN).unwrap();
    let mut hits = Vec::new();
    for caps in re.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let number: f64 = match caps[1].replace(',', ".").parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let factor = match &caps[2] {
            "ribu" | "rb" | "k" => 1_000.0,
            "juta" | "jt" | "m" => 1_000_000.0,
            // milyar | miliar | b
            _ => 1_000_000_000.0,
        };
        let value = (number * factor).round();
        if value <= 0.0 || value > MAX_AMOUNT as f64 {
            continue;
        }
        hits.push(Hit {
            start: whole.start(),
            end: whole.end(),
            value: value as u64,
        });
    }
    hits
}

/// Strategy 1: two or more multiplier amounts are a compound sum,
/// e.g. "1 juta 520 ribu" → 1_520_000.
fn compound_multipliers(text: &str) -> Option<AmountMatch> {
    let hits = multiplier_hits(text);
    if hits.len() < 2 {
        return None;
    }
    let total: u64 = hits.iter().map(|h| h.value).sum();
    if !in_range(total) {
        return None;
    }
    Some(AmountMatch {
        value: total,
        confidence: Confidence::High,
        spans: hits.iter().map(|h| (h.start, h.end)).collect(),
    })
}

/// Strategy 2: exactly one multiplier amount. When a grouped currency figure
/// in the same text lands within 10% of it, the currency figure is the more
/// explicit spelling and the larger of the two wins.
fn single_multiplier(text: &str) -> Option<AmountMatch> {
    let hits = multiplier_hits(text);
    let [hit] = hits.as_slice() else {
        return None;
    };
    let mut value = hit.value;
    let mut spans = vec![(hit.start, hit.end)];
    // Any currency figure inside the 10% window counts, not just the
    // largest one in the text; the largest figure may be an unrelated total.
    let within_window = currency_hits(text)
        .into_iter()
        .filter(|c| c.value.abs_diff(hit.value) <= hit.value / 10)
        .max_by_key(|c| c.value);
    if let Some(currency) = within_window {
        value = value.max(currency.value);
        spans.push((currency.start, currency.end));
    }
    Some(AmountMatch {
        value,
        confidence: Confidence::High,
        spans,
    })
}

/// Strategy 3: grouped currency digits ("Rp 20.000", "1.520.000,50"). The
/// largest match wins: on a receipt or sentence the total is usually the
/// biggest number.
fn grouped_currency(text: &str) -> Option<AmountMatch> {
    let best = currency_hits(text).into_iter().max_by_key(|h| h.value)?;
    Some(AmountMatch {
        value: best.value,
        confidence: Confidence::High,
        spans: vec![(best.start, best.end)],
    })
}

fn currency_hits(text: &str) -> Vec<Hit> {
    let mut candidates = Vec::new();
    for pattern in [GROUPED_PATTERN, RP_PREFIXED_PATTERN] {
        let re = Regex::new(pattern).unwrap();
        for m in re.find_iter(text) {
            let Some(value) = resolve_grouped(m.as_str()) else {
                continue;
            };
            if value < MIN_PLAIN_AMOUNT || value > MAX_AMOUNT {
                continue;
            }
            candidates.push(Hit {
                start: m.start(),
                end: m.end(),
                value,
            });
        }
    }
    candidates
}

/// Resolve a currency-formatted digit string. A final group of exactly two
/// digits after a separator is decimal cents (rounded to the nearest Rupiah);
/// three-digit groups are thousands groupings.
fn resolve_grouped(raw: &str) -> Option<u64> {
    let digits = raw
        .trim_start_matches("rp")
        .trim_start_matches('.')
        .trim();
    let parts: Vec<&str> = digits.split(['.', ',']).collect();
    let (groups, cents) = match parts.as_slice() {
        [head @ .., last] if !head.is_empty() && last.len() == 2 => {
            (head, last.parse::<u64>().ok()?)
        }
        _ => (parts.as_slice(), 0),
    };
    let mut value: u64 = groups.concat().parse().ok()?;
    if cents >= 50 {
        value += 1;
    }
    Some(value)
}

/// Strategy 4: a standalone run of 4+ digits is taken as a complete Rupiah
/// amount. Runs glued to date/decimal separators are skipped so "12/05/2024"
/// never becomes an amount of 2024.
fn bare_large_integer(text: &str) -> Option<AmountMatch> {
    let re = Regex::new(r"\d{4,}").unwrap();
    for m in re.find_iter(text) {
        if !standalone(text, m.start(), m.end()) {
            continue;
        }
        let Ok(value) = m.as_str().parse::<u64>() else {
            continue;
        };
        if value < MIN_PLAIN_AMOUNT || value > MAX_AMOUNT {
            continue;
        }
        return Some(AmountMatch {
            value,
            confidence: Confidence::Medium,
            spans: vec![(m.start(), m.end())],
        });
    }
    None
}

/// Strategy 5: a bare 1-3 digit number next to a transaction verb is read as
/// thousands ("beli bakso 20" → 20_000). Known to misfire on quantities
/// ("beli 2 buku"); kept for parity with how people actually type amounts.
fn contextual_small_integer(text: &str) -> Option<AmountMatch> {
    if !CONTEXT_VERBS.iter().any(|v| text.contains(v)) {
        return None;
    }
    // Any multiplier syntax in the text means the small number is not the amount.
    if Regex::new(MULTIPLIER_PATTERN).unwrap().is_match(text) {
        return None;
    }
    let re = Regex::new(r"\b\d{1,3}\b").unwrap();
    for m in re.find_iter(text) {
        if !standalone(text, m.start(), m.end()) {
            continue;
        }
        let Ok(n) = m.as_str().parse::<u64>() else {
            continue;
        };
        if n == 0 {
            continue;
        }
        return Some(AmountMatch {
            value: n * 1_000,
            confidence: Confidence::Low,
            spans: vec![(m.start(), m.end())],
        });
    }
    None
}

/// A digit run is standalone when it is not glued to a date or decimal
/// separator on either side.
fn standalone(text: &str, start: usize, end: usize) -> bool {
    if matches!(
        text[..start].chars().next_back(),
        Some('/' | '-' | ':' | '.' | ',')
    ) {
        return false;
    }
    let mut after = text[end..].chars();
    match after.next() {
        Some('/' | '-' | ':') => false,
        Some('.' | ',') => !matches!(after.next(), Some(c) if c.is_ascii_digit()),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> (u64, Confidence) {
        extract(text)
    }

    #[test]
    fn test_compound_multiplier_sum() {
        assert_eq!(amount("1 juta 520 ribu"), (1_520_000, Confidence::High));
        assert_eq!(
            amount("belanja bulanan 2 juta 300 ribu"),
            (2_300_000, Confidence::High)
        );
    }

    #[test]
    fn test_single_multiplier_variants() {
        assert_eq!(amount("beli barang 20 ribu"), (20_000, Confidence::High));
        assert_eq!(amount("bayar 500rb"), (500_000, Confidence::High));
        assert_eq!(amount("gaji 5 juta"), (5_000_000, Confidence::High));
        assert_eq!(amount("transfer 2jt"), (2_000_000, Confidence::High));
        assert_eq!(amount("jajan 20k"), (20_000, Confidence::High));
        assert_eq!(amount("dapat 1 milyar"), (1_000_000_000, Confidence::High));
    }

    #[test]
    fn test_decimal_multiplier() {
        assert_eq!(amount("1,5 juta"), (1_500_000, Confidence::High));
        assert_eq!(amount("2.5 ribu"), (2_500, Confidence::High));
    }

    #[test]
    fn test_grouped_currency() {
        assert_eq!(amount("Rp 20.000"), (20_000, Confidence::High));
        assert_eq!(amount("rp. 1.520.000"), (1_520_000, Confidence::High));
        assert_eq!(amount("rp20.000"), (20_000, Confidence::High));
        assert_eq!(amount("makan siang rp35000"), (35_000, Confidence::High));
        assert_eq!(amount("total 150.000 di kasir"), (150_000, Confidence::High));
    }

    #[test]
    fn test_grouped_currency_takes_largest() {
        assert_eq!(
            amount("bayar rp 5.000 parkir dan rp 150.000 servis"),
            (150_000, Confidence::High)
        );
    }

    #[test]
    fn test_decimal_cents_suffix() {
        assert_eq!(amount("rp 20.000,75"), (20_001, Confidence::High));
        assert_eq!(amount("rp 20.000,25"), (20_000, Confidence::High));
    }

    #[test]
    fn test_multiplier_currency_tiebreak_prefers_explicit() {
        // 22.000 is within 10% of 20 ribu, so the currency figure wins.
        assert_eq!(
            amount("beli 20 ribu (rp 22.000)"),
            (22_000, Confidence::High)
        );
        // 80.000 is far outside 10%, multiplier result stands.
        assert_eq!(
            amount("beli 20 ribu lalu lihat rp 80.000"),
            (20_000, Confidence::High)
        );
    }

    #[test]
    fn test_tiebreak_ignores_larger_unrelated_figure() {
        // 21.000 sits inside the 10% window even though 500.000 is the
        // largest currency figure in the text.
        assert_eq!(
            amount("beli 20 ribu (rp 21.000) total tagihan rp 500.000"),
            (21_000, Confidence::High)
        );
    }

    #[test]
    fn test_bare_large_integer() {
        assert_eq!(amount("bayar 50000 tunai"), (50_000, Confidence::Medium));
        assert_eq!(amount("1500"), (1_500, Confidence::Medium));
    }

    #[test]
    fn test_date_digits_are_not_amounts() {
        assert_eq!(amount("bayar tanggal 12/05/2024"), (0, Confidence::None));
        assert_eq!(amount("catatan 2024-01-15"), (0, Confidence::None));
    }

    #[test]
    fn test_small_integer_needs_context_verb() {
        assert_eq!(amount("beli bakso 20"), (20_000, Confidence::Low));
        assert_eq!(amount("bakso 20"), (0, Confidence::None));
    }

    #[test]
    fn test_small_integer_heuristic_misfires_on_quantity() {
        // Documented false positive of the x1000 heuristic.
        assert_eq!(amount("beli 2 buku"), (2_000, Confidence::Low));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(amount("transfer 11 milyar"), (0, Confidence::None));
        assert_eq!(amount("bayar 50000000000"), (0, Confidence::None));
    }

    #[test]
    fn test_no_amount_at_all() {
        assert_eq!(amount("asdkjasd"), (0, Confidence::None));
        assert_eq!(amount(""), (0, Confidence::None));
    }

    #[test]
    fn test_multiplier_word_is_not_part_of_longer_word() {
        // "m" must not fire inside "masuk".
        assert_eq!(amount("uang 5000 masuk"), (5_000, Confidence::Medium));
    }
}
