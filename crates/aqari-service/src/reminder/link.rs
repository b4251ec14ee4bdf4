//! WhatsApp deep-link building.
//!
//! Pure functions: normalization plus URL assembly, no I/O. Sending is
//! manual — the operator opens the returned link, nothing here delivers
//! a message.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Kuwait country calling code, prepended to local numbers.
const COUNTRY_CODE: &str = "965";

/// Normalize a stored phone number for `wa.me`.
///
/// 1. Strip whitespace, hyphens, and parentheses.
/// 2. A leading `0` is replaced by the country code.
/// 3. A bare 8-digit local number gets the country code prepended.
/// 4. A leading `+` is stripped.
/// 5. Anything else passes through unchanged.
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else if !cleaned.starts_with('+')
        && cleaned.len() == 8
        && cleaned.chars().all(|c| c.is_ascii_digit())
    {
        format!("{COUNTRY_CODE}{cleaned}")
    } else if let Some(rest) = cleaned.strip_prefix('+') {
        rest.to_string()
    } else {
        cleaned
    }
}

/// Build the `wa.me` deep link for a phone number and message body.
pub fn get_whatsapp_link(phone: &str, message: &str) -> String {
    let normalized = normalize_phone(phone);
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("https://wa.me/{normalized}?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_replaced_by_country_code() {
        assert_eq!(normalize_phone("0512 3456"), "9655123456");
        assert!(get_whatsapp_link("0512 3456", "hi").starts_with("https://wa.me/9655123456?text="));
    }

    #[test]
    fn test_eight_digit_local_number_gets_country_code() {
        assert_eq!(normalize_phone("51234567"), "96551234567");
        assert!(
            get_whatsapp_link("51234567", "hi").starts_with("https://wa.me/96551234567?text=")
        );
    }

    #[test]
    fn test_plus_prefix_stripped() {
        assert_eq!(normalize_phone("+965 5123 4567"), "96551234567");
    }

    #[test]
    fn test_separators_stripped() {
        assert_eq!(normalize_phone("(965) 5123-4567"), "96551234567");
    }

    #[test]
    fn test_ambiguous_number_passes_through() {
        // 9 digits, no prefix markers: none of the rules apply.
        assert_eq!(normalize_phone("123456789"), "123456789");
    }

    #[test]
    fn test_message_is_url_encoded() {
        let link = get_whatsapp_link("51234567", "Dear Jane,\nhello");
        assert_eq!(
            link,
            "https://wa.me/96551234567?text=Dear%20Jane%2C%0Ahello"
        );
    }
}
