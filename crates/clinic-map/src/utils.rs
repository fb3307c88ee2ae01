//! Text helpers shared by header matching and row mapping.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const ORDINAL_MARKS: [char; 4] = ['º', 'ª', '°', '§'];

const INVISIBLE_CHARS: [char; 5] = ['\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}', '\u{feff}'];

/// Normalizes text for comparison.
///
/// Lowercases, strips diacritics, folds ordinal marks (`Nº`, `n.º`, `N.`)
/// into a literal `n`, turns every other non-alphanumeric character into a
/// space and collapses whitespace.
pub fn normalize_text(raw: &str) -> String {
    let folded: String = raw
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    let folded = fold_ordinal_marks(&folded);
    folded
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases, strips diacritics and collapses whitespace, keeping punctuation.
pub fn fold_case_and_accents(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_ordinal_marks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;
    while idx < chars.len() {
        if !is_mark_or_period(chars[idx]) {
            out.push(chars[idx]);
            idx += 1;
            continue;
        }
        let start = idx;
        while idx < chars.len() && is_mark_or_period(chars[idx]) {
            idx += 1;
        }
        if ends_with_lone_n(&out) {
            out.push(' ');
        } else if chars[start..idx].iter().any(|ch| ORDINAL_MARKS.contains(ch)) {
            out.push_str("n ");
        } else {
            out.push(' ');
        }
    }
    out
}

fn is_mark_or_period(ch: char) -> bool {
    ch == '.' || ORDINAL_MARKS.contains(&ch)
}

fn ends_with_lone_n(text: &str) -> bool {
    let mut rev = text.chars().rev();
    rev.next() == Some('n') && rev.next().is_none_or(|ch| !ch.is_alphanumeric())
}

/// Returns true if `needle` occurs in `haystack` on word boundaries.
///
/// Both arguments are expected in [`normalize_text`] form.
pub fn contains_words(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && format!(" {haystack} ").contains(&format!(" {needle} "))
}

/// Cleans a raw cell value: drops zero-width and BOM characters, collapses
/// whitespace runs to a single space and trims.
pub fn clean_value(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !INVISIBLE_CHARS.contains(ch))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_case_and_accents() {
        assert_eq!(normalize_text("  Endereço   Completo "), "endereco completo");
        assert_eq!(normalize_text("PROFISSÃO"), "profissao");
        assert_eq!(normalize_text("E-mail"), "e mail");
        assert_eq!(normalize_text("data_nascimento"), "data nascimento");
        assert_eq!(normalize_text("Telefone (celular)"), "telefone celular");
    }

    #[test]
    fn test_normalize_text_ordinal_marks() {
        assert_eq!(normalize_text("Nº"), "n");
        assert_eq!(normalize_text("N°"), "n");
        assert_eq!(normalize_text("N.º do CPF"), "n do cpf");
        assert_eq!(normalize_text("n. cpf"), "n cpf");
        assert_eq!(normalize_text("nºcpf"), "n cpf");
        assert_eq!(normalize_text("1º contato"), "1n contato");
        assert_eq!(normalize_text("Dt. Nasc."), "dt nasc");
    }

    #[test]
    fn test_normalize_text_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" .. "), "");
    }

    #[test]
    fn test_contains_words() {
        assert!(contains_words("cpf do paciente", "cpf"));
        assert!(contains_words("telefone celular", "telefone celular"));
        assert!(!contains_words("cargo", "rg"));
        assert!(!contains_words("celular", "cel"));
        assert!(!contains_words("abc", ""));
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("\u{feff} Maria\u{200b}  da   Silva \n"), "Maria da Silva");
        assert_eq!(clean_value("\u{200b}\u{200d}"), "");
        assert_eq!(clean_value("linha 1\nlinha 2"), "linha 1 linha 2");
    }

    #[test]
    fn test_fold_case_and_accents() {
        assert_eq!(fold_case_and_accents(" João  D'Ávila "), "joao d'avila");
    }
}
