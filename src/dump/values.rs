// ABOUTME: Tokenizer and normalizer for INSERT value lists
// ABOUTME: Splits tuple text into rows of raw tokens and resolves quoting

use serde::Serialize;
use std::fmt;

/// A single reconstructed column value.
///
/// Dumps carry no type information we trust, so everything that is not the
/// `NULL` literal stays text. Numeric literals are kept in their textual
/// form; converting them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Null => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Split the tuple-list text of one INSERT statement into rows of raw tokens.
///
/// The input is the `(...),(...),...` text between `VALUES` and the
/// terminating semicolon. A single left-to-right scan tracks quote state so
/// that commas and parentheses inside string literals never split anything.
/// Quote characters are kept in the tokens; [`clean_value`] strips them
/// later. Tuple boundaries are recognized by the `),(` shape: after a row
/// closes at `)`, the scan advances past separator text up to and including
/// the next `(`.
///
/// Input lacking a final `)` still flushes its trailing token and row
/// rather than erroring; dumps truncated mid-statement parse as far as they
/// go.
pub fn parse_value_rows(values_text: &str) -> Vec<Vec<String>> {
    let mut text = values_text.trim();
    text = text.strip_prefix('(').unwrap_or(text);
    text = text.strip_suffix(')').unwrap_or(text);

    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;
    let mut quote_char = '\0';

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if !in_quotes {
            match c {
                '\'' | '"' => {
                    in_quotes = true;
                    quote_char = c;
                    token.push(c);
                }
                ',' => {
                    row.push(token.trim().to_string());
                    token.clear();
                }
                ')' => {
                    let trimmed = token.trim();
                    if !trimmed.is_empty() {
                        row.push(trimmed.to_string());
                    }
                    if !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                    }
                    token.clear();
                    // Skip separator text up to and including the next '('.
                    while i + 1 < chars.len() && chars[i + 1] != '(' {
                        i += 1;
                    }
                    if i + 1 < chars.len() {
                        i += 1;
                    }
                }
                _ => token.push(c),
            }
        } else {
            token.push(c);
            // A quote preceded by a backslash stays inside the literal.
            if c == quote_char && (i == 0 || chars[i - 1] != '\\') {
                in_quotes = false;
            }
        }

        i += 1;
    }

    // Flush whatever is pending at end of input.
    let trimmed = token.trim();
    if !trimmed.is_empty() {
        row.push(trimmed.to_string());
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Normalize one raw token from [`parse_value_rows`] into a [`Value`].
///
/// A case-insensitive `NULL` becomes [`Value::Null`]. A token bounded by a
/// quote pair has the quotes stripped and its escapes resolved. Everything
/// else (bare numbers, unquoted literals) passes through verbatim as text.
pub fn clean_value(raw: &str) -> Value {
    let value = raw.trim();

    if value.eq_ignore_ascii_case("NULL") {
        return Value::Null;
    }

    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return Value::Text(unescape(&value[1..value.len() - 1], '\''));
    }

    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return Value::Text(unescape(&value[1..value.len() - 1], '"'));
    }

    Value::Text(value.to_string())
}

/// Resolve escape sequences inside a string literal's body.
///
/// Backslash escapes come first (`\'` then `\\`, in that order), matching
/// mysqldump output. A doubled quote character is then collapsed to a
/// single one, since hand-authored dumps use that convention instead.
fn unescape(inner: &str, quote: char) -> String {
    let escaped_quote = format!("\\{}", quote);
    let doubled_quote = format!("{}{}", quote, quote);
    let quote_str = quote.to_string();

    inner
        .replace(&escaped_quote, &quote_str)
        .replace("\\\\", "\\")
        .replace(&doubled_quote, &quote_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_simple_values() {
        let rows = parse_value_rows("(1, 'alice', 'alice@example.com')");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["1", "'alice'", "'alice@example.com'"]);
    }

    #[test]
    fn test_multiple_rows_split_on_tuple_boundary() {
        let rows = parse_value_rows("('x','1'),('y','2')");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["'x'", "'1'"]);
        assert_eq!(rows[1], vec!["'y'", "'2'"]);
    }

    #[test]
    fn test_comma_inside_quotes_does_not_split() {
        let rows = parse_value_rows("('a,b', 2)");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["'a,b'", "2"]);
    }

    #[test]
    fn test_parenthesis_inside_quotes_does_not_close_row() {
        let rows = parse_value_rows("('call (me), maybe', 'x')");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["'call (me), maybe'", "'x'"]);
    }

    #[test]
    fn test_escaped_quote_stays_inside_literal() {
        let rows = parse_value_rows("('it\\'s fine', 1)");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["'it\\'s fine'", "1"]);
    }

    #[test]
    fn test_doubled_quote_stays_in_one_token() {
        let rows = parse_value_rows("('it''s', 1)");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["'it''s'", "1"]);
    }

    #[test]
    fn test_empty_tuple_list_yields_no_rows() {
        assert!(parse_value_rows("").is_empty());
        assert!(parse_value_rows("   ").is_empty());
        assert!(parse_value_rows("()").is_empty());
    }

    #[test]
    fn test_truncated_input_flushes_trailing_row() {
        // No closing paren: the scan still yields what it saw.
        let rows = parse_value_rows("(1, 'partial'");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["1", "'partial'"]);
    }

    #[test]
    fn test_whitespace_between_tuples_is_skipped() {
        let rows = parse_value_rows("(1, 'a') ,\n (2, 'b')");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "'a'"]);
        assert_eq!(rows[1], vec!["2", "'b'"]);
    }

    #[test]
    fn test_empty_field_between_commas_is_kept() {
        let rows = parse_value_rows("(1,,2)");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["1", "", "2"]);
    }

    #[test]
    fn test_clean_value_null_is_case_insensitive() {
        assert_eq!(clean_value("NULL"), Value::Null);
        assert_eq!(clean_value("null"), Value::Null);
        assert_eq!(clean_value("NuLl"), Value::Null);
    }

    #[test]
    fn test_clean_value_quoted_null_stays_text() {
        assert_eq!(clean_value("'NULL'"), Value::Text("NULL".to_string()));
    }

    #[test]
    fn test_clean_value_strips_single_quotes() {
        assert_eq!(clean_value("'hello'"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_clean_value_strips_double_quotes() {
        assert_eq!(clean_value("\"hello\""), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_clean_value_resolves_backslash_escapes() {
        assert_eq!(clean_value("'it\\'s'"), Value::Text("it's".to_string()));
        assert_eq!(clean_value("'a\\\\b'"), Value::Text("a\\b".to_string()));
        assert_eq!(
            clean_value("\"she said \\\"hi\\\"\""),
            Value::Text("she said \"hi\"".to_string())
        );
    }

    #[test]
    fn test_clean_value_collapses_doubled_quotes() {
        assert_eq!(clean_value("'it''s'"), Value::Text("it's".to_string()));
        assert_eq!(clean_value("\"a\"\"b\""), Value::Text("a\"b".to_string()));
    }

    #[test]
    fn test_clean_value_keeps_numbers_as_text() {
        assert_eq!(clean_value("42"), Value::Text("42".to_string()));
        assert_eq!(clean_value("3.14"), Value::Text("3.14".to_string()));
        assert_eq!(clean_value("-7"), Value::Text("-7".to_string()));
    }

    #[test]
    fn test_clean_value_unquoted_literal_passes_through() {
        assert_eq!(
            clean_value("CURRENT_TIMESTAMP"),
            Value::Text("CURRENT_TIMESTAMP".to_string())
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_value_serializes_to_json() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Value::Text("a".to_string())).unwrap(),
            "\"a\""
        );
    }
}
