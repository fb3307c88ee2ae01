const MALE_WORDS: &[&str] = &["masculino", "masc", "homem", "male", "man", "h"];
const FEMALE_WORDS: &[&str] = &["feminino", "fem", "mulher", "female", "woman"];

const MALE_PREFIXES: &[&str] = &["masc", "hom"];
const FEMALE_PREFIXES: &[&str] = &["fem", "mulh", "wom"];

/// Normalizes a sex marker to `M` or `F`.
///
/// A leading `M`/`F` decides first, so `Mulher` reads as `M`. Otherwise
/// known words and word prefixes are matched. Anything else returns the
/// trimmed input.
pub fn normalize_sex(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.chars().next().map(|ch| ch.to_ascii_uppercase()) {
        Some('M') => return "M".to_string(),
        Some('F') => return "F".to_string(),
        _ => {}
    }
    let lowered = trimmed.to_lowercase();
    let word = lowered.trim_end_matches('.');
    if MALE_WORDS.contains(&word) || MALE_PREFIXES.iter().any(|prefix| word.starts_with(prefix)) {
        return "M".to_string();
    }
    if FEMALE_WORDS.contains(&word)
        || FEMALE_PREFIXES.iter().any(|prefix| word.starts_with(prefix))
    {
        return "F".to_string();
    }
    trimmed.to_string()
}
