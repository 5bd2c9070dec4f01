// ABOUTME: INSERT statement scanner that collects raw tuple-list text
// ABOUTME: Matches backtick-quoted table names without a SQL grammar

/// Collect the raw tuple-list text of every `INSERT INTO \`table\` ...
/// VALUES ...;` statement for `table`, in file order.
///
/// Each returned slice is the text between `VALUES` and the terminating
/// semicolon, trimmed but otherwise untouched; a statement holding several
/// comma-separated tuples comes back as one slice and is split later by
/// the tokenizer.
///
/// Keyword and table-name matching is ASCII case-insensitive, and any
/// amount of text may sit between the table name and `VALUES` (a column
/// list, newlines). Only backtick quoting of the table name is recognized;
/// a dump that quotes names differently simply yields no matches.
pub fn insert_value_lists<'a>(dump: &'a str, table: &str) -> Vec<&'a str> {
    let lower = dump.to_ascii_lowercase();
    const INSERT: &str = "insert into";
    const VALUES: &str = "values";

    let mut lists = Vec::new();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find(INSERT) {
        let after_keyword = pos + found + INSERT.len();
        pos = after_keyword;

        let cursor = skip_whitespace(dump, after_keyword);
        let Some(rest) = dump[cursor..].strip_prefix('`') else {
            continue;
        };
        let Some(name_len) = rest.find('`') else {
            continue;
        };
        if !rest[..name_len].eq_ignore_ascii_case(table) {
            continue;
        }

        let after_name = cursor + 1 + name_len + 1;
        let Some(values_at) = lower[after_name..].find(VALUES) else {
            continue;
        };
        let tuples_start = after_name + values_at + VALUES.len();
        let Some(end) = dump[tuples_start..].find(';') else {
            // Truncated statement at end of dump; nothing more to find.
            break;
        };

        lists.push(dump[tuples_start..tuples_start + end].trim());
        pos = tuples_start + end + 1;
    }

    lists
}

fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}
