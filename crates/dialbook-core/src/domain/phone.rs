/// Number of digits in a normalized phone number.
const PHONE_DIGITS: usize = 10;

/// Reduces free-form phone input to its 10-digit local form.
///
/// All non-digit characters are dropped first. Exactly ten digits are kept
/// as-is, eleven digits with a leading `0` lose the zero, and twelve or more
/// digits are treated as country code plus local number, keeping the last
/// ten. Anything else has no normalized form.
pub fn normalize_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();

    match digits.len() {
        PHONE_DIGITS => Some(digits),
        11 if digits.starts_with('0') => Some(digits[1..].to_string()),
        len if len > PHONE_DIGITS + 1 => Some(digits[len - PHONE_DIGITS..].to_string()),
        _ => None,
    }
}
