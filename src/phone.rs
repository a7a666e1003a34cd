//! Phone Numbers

/// Ghana's international calling code.
pub const COUNTRY_CODE: &str = "233";

/// Digits in a local number written with its trunk `0` prefix, e.g. `0543210826`.
const LOCAL_DIGITS: usize = 10;

/// Digits in a subscriber number written without any prefix, e.g. `543210826`.
const SUBSCRIBER_DIGITS: usize = 9;

/// Shortest normalised number treated as something a chat app or dialer can reach.
pub const MIN_DIALABLE_DIGITS: usize = 4;

/// Normalise free-form phone text into international dialing digits.
///
/// Every non-digit is dropped. Local numbers (`0` + 9 digits) lose the trunk prefix and gain
/// [`COUNTRY_CODE`]; bare 9-digit subscriber numbers gain [`COUNTRY_CODE`]. Anything else is
/// returned as the digits that were found, so the result may be empty.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return digits;
    }

    if digits.len() == LOCAL_DIGITS
        && let Some(subscriber) = digits.strip_prefix('0')
    {
        return format!("{COUNTRY_CODE}{subscriber}");
    }

    if digits.len() == SUBSCRIBER_DIGITS && !digits.starts_with(COUNTRY_CODE) {
        return format!("{COUNTRY_CODE}{digits}");
    }

    digits
}

/// Normalise `raw` and keep it only when it is long enough to dial.
pub fn dialable_phone(raw: &str) -> Option<String> {
    let phone = normalize_phone(raw);

    (phone.len() >= MIN_DIALABLE_DIGITS).then_some(phone)
}
