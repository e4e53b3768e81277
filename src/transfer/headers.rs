//! Response-header folding.
//!
//! HTTP allows the same header field to appear on several wire lines. For
//! reporting we collapse the received multi-valued map into one canonical
//! line per field name, following RFC 2616 §4.2: the order in which repeated
//! field lines are received is significant, and repeated values may be
//! comma-joined into a single line.

use std::collections::HashSet;

use http::HeaderMap;

/// Folds an ordered sequence of `(name, values)` pairs into a single text blob.
///
/// - Pair order is preserved as given; nothing is sorted.
/// - Pairs with an empty name are skipped. That is how the status line arrives:
///   it has no field name.
/// - Within one name, repeated literal values are dropped, keeping the first
///   occurrence's position; the surviving values are joined with `", "`.
///   Deduplication state does not carry over to the next name.
/// - Emitted lines are joined with a single `\n`, with no leading or trailing
///   newline. An empty or fully-skipped input yields the empty string.
///
/// No case normalization and no whitespace trimming is performed.
pub fn fold_header_fields<I, N, V>(fields: I) -> String
where
    I: IntoIterator<Item = (N, Vec<V>)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();

    for (name, values) in fields {
        let name = name.as_ref();

        // Omit the status line (field with an empty name)
        if name.is_empty() {
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(name);
        out.push_str(": ");

        let mut seen: HashSet<&str> = HashSet::with_capacity(values.len());
        let mut first = true;
        for value in &values {
            let value = value.as_ref();

            // Skip values we already emitted for this name. We cannot collect
            // into a set up front: the original ordering must survive.
            if !seen.insert(value) {
                continue;
            }

            if !first {
                out.push_str(", ");
            }
            out.push_str(value);
            first = false;
        }
    }

    out
}

/// Folds an [`http::HeaderMap`] as delivered by the network layer.
///
/// `HeaderMap` iteration yields names in insertion order and groups the values
/// of repeated names, which is exactly the ordered multi-map the folding
/// contract needs. Values that are not valid UTF-8 fold as the empty string.
pub fn fold_header_map(headers: &HeaderMap) -> String {
    fold_header_fields(headers.keys().map(|name| {
        let values: Vec<&str> = headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap_or(""))
            .collect();
        (name.as_str(), values)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn folding_preserves_received_order() {
        let folded = fold_header_fields([
            ("Set-Cookie", vec!["a=1", "b=2"]),
            ("Content-Type", vec!["text/html"]),
        ]);
        assert_eq!(folded, "Set-Cookie: a=1, b=2\nContent-Type: text/html");
    }

    #[test]
    fn duplicate_values_collapse_to_first_occurrence() {
        let folded = fold_header_fields([("Set-Cookie", vec!["a=1", "a=1"])]);
        assert_eq!(folded, "Set-Cookie: a=1");
    }

    #[test]
    fn dedup_keeps_order_of_first_occurrences() {
        let folded = fold_header_fields([("X-Trace", vec!["b", "a", "b", "c", "a"])]);
        assert_eq!(folded, "X-Trace: b, a, c");
    }

    #[test]
    fn dedup_state_resets_between_names() {
        let folded = fold_header_fields([("X-A", vec!["v"]), ("X-B", vec!["v"])]);
        assert_eq!(folded, "X-A: v\nX-B: v");
    }

    #[test]
    fn status_line_entry_is_skipped() {
        let folded = fold_header_fields([
            ("", vec!["HTTP/1.1 200 OK"]),
            ("X-Id", vec!["42"]),
        ]);
        assert_eq!(folded, "X-Id: 42");
    }

    #[test]
    fn empty_input_folds_to_empty_string() {
        let folded = fold_header_fields(std::iter::empty::<(&str, Vec<&str>)>());
        assert_eq!(folded, "");
    }

    #[test]
    fn all_entries_skipped_folds_to_empty_string() {
        let folded = fold_header_fields([("", vec!["HTTP/1.1 204 No Content"])]);
        assert_eq!(folded, "");
    }

    #[test]
    fn no_case_normalization_or_trimming() {
        let folded = fold_header_fields([("X-RAW", vec![" a ", "a"])]);
        assert_eq!(folded, "X-RAW:  a , a");
    }

    #[test]
    fn header_map_adapter_groups_repeated_names_in_insertion_order() {
        let mut map = HeaderMap::new();
        map.append(
            HeaderName::from_static("set-cookie"),
            HeaderValue::from_static("a=1"),
        );
        map.append(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("text/html"),
        );
        map.append(
            HeaderName::from_static("set-cookie"),
            HeaderValue::from_static("b=2"),
        );

        assert_eq!(
            fold_header_map(&map),
            "set-cookie: a=1, b=2\ncontent-type: text/html"
        );
    }

    #[test]
    fn header_map_adapter_handles_empty_map() {
        assert_eq!(fold_header_map(&HeaderMap::new()), "");
    }
}
