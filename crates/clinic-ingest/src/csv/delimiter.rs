use clinic_model::Delimiter;

/// Picks the dominant field separator of a header line.
///
/// Separators inside quoted spans are ignored. Ties resolve as
/// semicolon > tab > comma, and a line without any candidate yields comma.
pub fn detect_delimiter(header_line: &str) -> Delimiter {
    let mut in_quotes = false;
    let (mut commas, mut semicolons, mut tabs) = (0usize, 0usize, 0usize);
    for ch in header_line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => commas += 1,
            ';' if !in_quotes => semicolons += 1,
            '\t' if !in_quotes => tabs += 1,
            _ => {}
        }
    }

    if semicolons > 0 && semicolons >= commas && semicolons >= tabs {
        Delimiter::Semicolon
    } else if tabs > 0 && tabs >= commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}
