/// Logical lines of an export, assembled without breaking quoted spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalLines {
    pub lines: Vec<String>,
    /// True when the text ended while still inside a quoted span.
    pub unterminated_quote: bool,
}

/// Splits raw text into logical lines.
///
/// `\n` and `\r\n` end a line only outside quoted spans; inside a span the
/// break is kept as a literal `\n`. The quote flag toggles on every `"`.
/// Empty lines between records are kept so positions stay faithful to the
/// source; a trailing blank buffer is dropped.
pub fn split_logical_lines(text: &str) -> LogicalLines {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                end_or_continue(&mut lines, &mut current, in_quotes);
            }
            '\n' => end_or_continue(&mut lines, &mut current, in_quotes),
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    LogicalLines {
        lines,
        unterminated_quote: in_quotes,
    }
}

fn end_or_continue(lines: &mut Vec<String>, current: &mut String, in_quotes: bool) {
    if in_quotes {
        current.push('\n');
    } else {
        lines.push(std::mem::take(current));
    }
}
