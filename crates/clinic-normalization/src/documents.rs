//! Brazilian document and contact number formats.

/// Keeps ASCII digits only.
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats an 11-digit CPF as `###.###.###-##`.
///
/// Any other digit count returns the trimmed input. Check digits are not
/// verified.
pub fn normalize_cpf(raw: &str) -> String {
    let digits = only_digits(raw);
    if digits.len() != 11 {
        return raw.trim().to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Formats a phone number with its two-digit area code.
///
/// Nine-digit subscriber numbers get the mobile hyphen (`(11) 98765-4321`);
/// other lengths are kept whole after the area code. Fewer than ten digits
/// return the trimmed input.
pub fn normalize_phone(raw: &str) -> String {
    let digits = only_digits(raw);
    if digits.len() < 10 {
        return raw.trim().to_string();
    }
    let (area, subscriber) = digits.split_at(2);
    if subscriber.len() == 9 {
        format!("({area}) {}-{}", &subscriber[..5], &subscriber[5..])
    } else {
        format!("({area}) {subscriber}")
    }
}

/// Formats an 8-digit CEP as `#####-###`.
pub fn normalize_cep(raw: &str) -> String {
    let digits = only_digits(raw);
    if digits.len() != 8 {
        return raw.trim().to_string();
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}
