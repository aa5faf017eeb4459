/// Strips everything but ASCII digits from a phone number, so that
/// `555-123-4567`, `(555) 123 4567` and `5551234567` all compare equal.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
