// ABOUTME: CREATE TABLE scanner that recovers ordered column lists
// ABOUTME: Filters out key/constraint declarations inside the table body

/// Extract the ordered column names for `table` from a dump.
///
/// Finds the first `CREATE TABLE \`table\`` block, takes its body up to the
/// closing `) ENGINE` marker, and keeps each line that declares a column:
/// one that starts with a backtick and not with a constraint keyword. Lines
/// for keys, constraints, and so on are skipped, never errored.
///
/// Returns an empty list when the dump has no definition for the table;
/// downstream row assembly then drops every row for it.
pub fn table_columns(dump: &str, table: &str) -> Vec<String> {
    let body = match definition_body(dump, table) {
        Some(body) => body,
        None => return Vec::new(),
    };

    let mut columns = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("PRIMARY") || trimmed.starts_with("KEY") {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix('`') else {
            continue;
        };
        if let Some(end) = rest.find('`') {
            columns.push(rest[..end].to_string());
        }
    }

    columns
}

/// Locate the body of `CREATE TABLE \`table\` ( ... ) ENGINE` and return the
/// text between the outer parenthesis and the closing marker.
///
/// Keyword and table-name matching is ASCII case-insensitive; whitespace
/// between the pieces is tolerated. Only backtick quoting is recognized.
fn definition_body<'a>(dump: &'a str, table: &str) -> Option<&'a str> {
    let lower = dump.to_ascii_lowercase();
    const CREATE: &str = "create table";

    let mut pos = 0;
    while let Some(found) = lower[pos..].find(CREATE) {
        let header = pos + found + CREATE.len();
        pos = header;

        let mut cursor = skip_whitespace(dump, header);
        let Some(rest) = dump[cursor..].strip_prefix('`') else {
            continue;
        };
        let Some(name_len) = rest.find('`') else {
            continue;
        };
        if !rest[..name_len].eq_ignore_ascii_case(table) {
            continue;
        }

        cursor = cursor + 1 + name_len + 1;
        cursor = skip_whitespace(dump, cursor);
        if !dump[cursor..].starts_with('(') {
            continue;
        }
        let body_start = cursor + 1;
        return close_before_engine(dump, &lower, body_start)
            .map(|body_end| &dump[body_start..body_end]);
    }

    None
}

/// Find the `) ENGINE` marker after `from` and return the offset of its `)`.
fn close_before_engine(dump: &str, lower: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = lower[pos..].find("engine") {
        let engine_at = pos + found;
        let before = dump[..engine_at].trim_end();
        if before.ends_with(')') && before.len() > from {
            return Some(before.len() - 1);
        }
        pos = engine_at + "engine".len();
    }
    None
}

fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r"
CREATE TABLE `is_user` (
  `user_id` int(11) NOT NULL AUTO_INCREMENT,
  `user_name` varchar(60) NOT NULL,
  `user_email` varchar(120) NOT NULL,
  `user_status` varchar(20) DEFAULT 'active',
  PRIMARY KEY (`user_id`),
  KEY `idx_email` (`user_email`),
  UNIQUE KEY `uniq_name` (`user_name`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;

CREATE TABLE `is_ticket` (
  `ticket_id` int(11) NOT NULL,
  `subject` text
) ENGINE=MyISAM;
";

    #[test]
    fn test_columns_in_declaration_order() {
        let columns = table_columns(DUMP, "is_user");
        assert_eq!(
            columns,
            vec!["user_id", "user_name", "user_email", "user_status"]
        );
    }

    #[test]
    fn test_constraint_lines_are_skipped() {
        let columns = table_columns(DUMP, "is_user");
        assert!(!columns.iter().any(|c| c == "idx_email"));
        assert!(!columns.iter().any(|c| c == "uniq_name"));
    }

    #[test]
    fn test_second_table_is_found_independently() {
        let columns = table_columns(DUMP, "is_ticket");
        assert_eq!(columns, vec!["ticket_id", "subject"]);
    }

    #[test]
    fn test_missing_table_yields_empty_list() {
        assert!(table_columns(DUMP, "is_missing").is_empty());
    }

    #[test]
    fn test_table_name_match_is_exact() {
        // `is_user` must not match a prefix of a longer name.
        let dump = "CREATE TABLE `is_user_archive` (\n  `id` int\n) ENGINE=InnoDB;";
        assert!(table_columns(dump, "is_user").is_empty());
        assert_eq!(table_columns(dump, "is_user_archive"), vec!["id"]);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let dump = "create table `t` (\n  `a` int,\n  `b` int\n) engine=InnoDB;";
        assert_eq!(table_columns(dump, "t"), vec!["a", "b"]);
    }

    #[test]
    fn test_definition_without_engine_marker_yields_nothing() {
        let dump = "CREATE TABLE `t` (\n  `a` int\n);";
        assert!(table_columns(dump, "t").is_empty());
    }
}
