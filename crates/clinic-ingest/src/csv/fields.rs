use clinic_model::Delimiter;

/// Splits one logical line into field values.
///
/// The delimiter ends a field only outside quoted spans; the quote flag
/// toggles on every `"`. Each value is trimmed, loses one wrapping quote on
/// each side, and has doubled quotes collapsed to a single literal quote.
pub fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    let separator = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == separator && !in_quotes {
            fields.push(unquote(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }

    // Don't forget the last field
    fields.push(unquote(&current));
    fields
}

fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_fields("a,b,c", Delimiter::Comma), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a;b;;", Delimiter::Semicolon), vec!["a", "b", "", ""]);
        assert_eq!(split_fields("a\tb", Delimiter::Tab), vec!["a", "b"]);
    }

    #[test]
    fn test_split_quoted() {
        let result = split_fields("\"Silva, Maria\",b,c", Delimiter::Comma);
        assert_eq!(result, vec!["Silva, Maria", "b", "c"]);
    }

    #[test]
    fn test_split_escaped_quotes() {
        let result = split_fields("\"ele disse \"\"oi\"\"\",b", Delimiter::Comma);
        assert_eq!(result, vec!["ele disse \"oi\"", "b"]);
    }

    #[test]
    fn test_split_trimmed() {
        let result = split_fields("  a  ;  \"b\"  ", Delimiter::Semicolon);
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_embedded_line_break_survives() {
        let result = split_fields("1;\"Rua A, 10\nfundos\";x", Delimiter::Semicolon);
        assert_eq!(result, vec!["1", "Rua A, 10\nfundos", "x"]);
    }

    #[test]
    fn test_unbalanced_quote_takes_rest_of_line() {
        let result = split_fields("1,\"aberto,2,3", Delimiter::Comma);
        assert_eq!(result, vec!["1", "aberto,2,3"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(split_fields("", Delimiter::Comma), vec![""]);
    }
}
