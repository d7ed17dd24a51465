/// Splits one CSV line into trimmed fields.
///
/// Commas inside double quotes do not split, and `""` inside a quoted field
/// yields a literal quote. Unbalanced quotes are tolerated: the line is still
/// split on a best-effort basis and at least one field is always returned.
/// A `"` in the middle of a field toggles quoting, as the sheet export expects;
/// the csv crate keeps it literal instead, so it is not a drop-in replacement.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honors_quoted_commas_and_escaped_quotes() {
        assert_eq!(parse_line(r#"a,"b,c","d""e""#), vec!["a", "b,c", "d\"e"]);
    }

    #[test]
    fn trims_fields_and_keeps_empty_columns() {
        assert_eq!(parse_line("  a , ,c\r"), vec!["a", "", "c"]);
        assert_eq!(parse_line(""), vec![""]);
        assert_eq!(parse_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn unbalanced_quotes_do_not_fail() {
        assert_eq!(parse_line(r#"x,"open,still open"#), vec!["x", "open,still open"]);
        assert_eq!(parse_line(r#"ab"c,d"#), vec!["abc,d"]);
    }

    #[test]
    fn calls_are_independent() {
        let first = parse_line(r#""unterminated"#);
        let second = parse_line("a,b");
        assert_eq!(first, vec!["unterminated"]);
        assert_eq!(second, vec!["a", "b"]);
    }
}
