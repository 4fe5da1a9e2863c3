//! Resolution of operator input lines to alerts.
//!
//! A line is `<name>` or `<name>:<anything>`; only the text before the first
//! `:` is compared, exactly and case-sensitively. This lets the output of
//! `list` (`<name>: <State>`) be piped straight back in.
//!
//! Alert names are not unique, so a key resolves to every alert carrying
//! that name. Names that themselves contain `:` cannot be addressed.

use crate::models::Alert;

/// Separator between the alert name and ignored trailing text.
pub const NAME_SEPARATOR: char = ':';

/// The significant part of an input line.
pub fn match_key(line: &str) -> &str {
    match line.split_once(NAME_SEPARATOR) {
        Some((key, _)) => key,
        None => line,
    }
}

/// All alerts whose name equals the line's key, in registry order.
///
/// An empty key matches nothing.
pub fn resolve<'a>(line: &str, registry: &'a [Alert]) -> Vec<&'a Alert> {
    positions(match_key(line), registry)
        .into_iter()
        .map(|i| &registry[i])
        .collect()
}

/// Registry indices of alerts named `key`.
pub(crate) fn positions(key: &str, registry: &[Alert]) -> Vec<usize> {
    if key.is_empty() {
        return Vec::new();
    }
    registry
        .iter()
        .enumerate()
        .filter(|(_, alert)| alert.name == key)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn alert(id: u64, name: &str) -> Alert {
        Alert {
            id,
            name: name.to_string(),
            description: String::new(),
            active: true,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_match_key_strips_after_first_separator() {
        assert_eq!(match_key("cpu-high: extra notes"), "cpu-high");
        assert_eq!(match_key("a:b:c"), "a");
        assert_eq!(match_key("plain"), "plain");
        assert_eq!(match_key(":leading"), "");
        assert_eq!(match_key(""), "");
    }

    #[test]
    fn test_match_key_keeps_whitespace() {
        assert_eq!(match_key(" cpu-high"), " cpu-high");
    }

    #[test]
    fn test_resolve_with_trailing_text() {
        let registry = vec![alert(1, "cpu-high"), alert(2, "disk-full")];
        let found = resolve("cpu-high: extra notes", &registry);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_resolve_returns_all_duplicates() {
        let registry = vec![alert(10, "dup"), alert(11, "other"), alert(12, "dup")];
        let ids: Vec<u64> = resolve("dup", &registry).iter().map(|a| a.id).collect();
        assert_eq!(ids, [10, 12]);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = vec![alert(1, "CPU-high")];
        assert!(resolve("cpu-high", &registry).is_empty());
    }

    #[test]
    fn test_empty_key_matches_nothing() {
        let registry = vec![alert(1, "")];
        assert!(resolve("", &registry).is_empty());
        assert!(resolve(": Active", &registry).is_empty());
    }

    #[test]
    fn test_name_containing_separator_is_unreachable() {
        let registry = vec![alert(1, "db:primary")];
        assert!(resolve("db:primary", &registry).is_empty());
    }
}
