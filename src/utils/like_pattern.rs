//! Helpers for building SQL `LIKE` patterns from user input.

/// Escapes `\`, `%` and `_` so they match literally in a PostgreSQL
/// `LIKE`/`ILIKE` pattern using the default `\` escape character.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds a substring pattern (`%term%`) from raw user input.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_term_unchanged() {
        assert_eq!(escape_like("San Juan"), "San Juan");
        assert_eq!(contains_pattern("norte"), "%norte%");
    }

    #[test]
    fn test_wildcards_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"c:\x"), r"c:\\x");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(contains_pattern("Clínica"), "%Clínica%");
    }
}
