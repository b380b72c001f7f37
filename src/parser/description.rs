//! Description extraction: strip everything the other extractors consumed
//! and keep whatever free text remains.

use crate::lexicon::FALLBACK_DESCRIPTION;

/// Remove the given byte spans (computed on `lowered`) plus every occurrence
/// of the consumed type keyword, then collapse whitespace. A residue under
/// three characters falls back to the trimmed original text, and an empty
/// original to the "Transaction" placeholder.
pub(crate) fn extract(
    original: &str,
    lowered: &str,
    amount_spans: &[(usize, usize)],
    date_span: Option<(usize, usize)>,
    type_keyword: Option<&str>,
) -> String {
    let mut spans: Vec<(usize, usize)> = amount_spans.to_vec();
    if let Some(span) = date_span {
        spans.push(span);
    }
    if let Some(keyword) = type_keyword {
        for (pos, m) in lowered.match_indices(keyword) {
            spans.push((pos, pos + m.len()));
        }
    }

    // ASCII lowering preserves byte offsets; if it did not, strip from the
    // lowered copy instead of misaligning spans on the original.
    let base = if original.len() == lowered.len() {
        original
    } else {
        lowered
    };
    let kept: String = base
        .char_indices()
        .filter(|(i, _)| !spans.iter().any(|(start, end)| i >= start && i < end))
        .map(|(_, c)| c)
        .collect();
    let cleaned = kept.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() >= 3 {
        return cleaned;
    }
    let fallback = original.trim();
    if fallback.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_consumed_tokens() {
        let original = "Beli bakso hari ini 20 ribu";
        let lowered = original.to_lowercase();
        // "20 ribu" at 20..27, "hari ini" at 11..19, keyword "beli".
        let out = extract(original, &lowered, &[(20, 27)], Some((11, 19)), Some("beli"));
        assert_eq!(out, "bakso");
    }

    #[test]
    fn test_short_residue_falls_back_to_original() {
        let original = "Gaji 5 juta";
        let lowered = original.to_lowercase();
        let out = extract(original, &lowered, &[(5, 11)], None, Some("gaji"));
        assert_eq!(out, "Gaji 5 juta");
    }

    #[test]
    fn test_empty_original_uses_placeholder() {
        let out = extract("", "", &[], None, None);
        assert_eq!(out, "Transaction");
    }

    #[test]
    fn test_no_spans_collapses_whitespace() {
        let out = extract("nasi  goreng   spesial", "nasi  goreng   spesial", &[], None, None);
        assert_eq!(out, "nasi goreng spesial");
    }

    #[test]
    fn test_deterministic() {
        let original = "Bayar tagihan listrik kemarin 500rb";
        let lowered = original.to_lowercase();
        let a = extract(original, &lowered, &[(30, 35)], Some((22, 29)), Some("bayar"));
        let b = extract(original, &lowered, &[(30, 35)], Some((22, 29)), Some("bayar"));
        assert_eq!(a, b);
        assert_eq!(a, "tagihan listrik");
    }
}
