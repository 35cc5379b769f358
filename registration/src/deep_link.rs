//! WhatsApp and email deep links.
//!
//! Only the URL is built here. Whatever opens it (a chat client, a mail
//! client) is outside this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Canned messages offered by the floating contact widget
pub const QUICK_MESSAGES: [&str; 3] = [
    "Hi! I\u{2019}d like to join a service \u{1f64f}",
    "Please pray with me",
    "How can I partner?",
];

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Deep link construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    /// The number contains characters other than digits and separators
    #[error("phone number {0:?} contains invalid characters")]
    InvalidCharacters(String),

    /// E.164 numbers have 8 to 15 digits
    #[error("phone number {input:?} has {digits} digits, expected 8 to 15")]
    DigitCount {
        /// Number as given
        input: String,
        /// Digits found
        digits: usize,
    },
}

/// An E.164 phone number, held as digits without the leading `+`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Parses `+27 72 738 9214`, `27727389214`, `(+27) 72-738-9214` and the like
    ///
    /// # Errors
    ///
    /// Returns [`DeepLinkError`] for letters or other stray characters, or a
    /// digit count outside 8..=15.
    pub fn parse(input: &str) -> Result<Self, DeepLinkError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '(' | ')' | '.' | '+' => {},
                _ => return Err(DeepLinkError::InvalidCharacters(input.to_string())),
            }
        }

        if !(8..=15).contains(&digits.len()) {
            return Err(DeepLinkError::DigitCount {
                input: input.to_string(),
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// Digits without the `+`
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// `https://wa.me/<digits>`, with `?text=<percent-encoded>` when there is a message
#[must_use]
pub fn whatsapp_link(number: &WhatsAppNumber, text: Option<&str>) -> String {
    match text.filter(|text| !text.is_empty()) {
        Some(text) => format!(
            "{WHATSAPP_BASE}{}?text={}",
            number.digits(),
            urlencoding::encode(text)
        ),
        None => format!("{WHATSAPP_BASE}{}", number.digits()),
    }
}

/// `mailto:` link with optional percent-encoded subject and body
#[must_use]
pub fn mailto_link(address: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let params: Vec<String> = [("subject", subject), ("body", body)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.is_empty())
                .map(|value| format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();

    if params.is_empty() {
        format!("mailto:{address}")
    } else {
        format!("mailto:{address}?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number() -> WhatsAppNumber {
        WhatsAppNumber::parse("+27727389214").unwrap_or_else(|e| unreachable!("{e}"))
    }

    #[test]
    fn test_parse_strips_separators() {
        let parsed = WhatsAppNumber::parse("(+27) 72-738 9214");
        assert_eq!(parsed, Ok(number()));
        assert_eq!(number().to_string(), "+27727389214");
    }

    #[test]
    fn test_parse_rejects_letters_and_bad_lengths() {
        assert!(matches!(
            WhatsAppNumber::parse("+27 CALL-NOW"),
            Err(DeepLinkError::InvalidCharacters(_))
        ));
        assert!(matches!(
            WhatsAppNumber::parse("+123"),
            Err(DeepLinkError::DigitCount { digits: 3, .. })
        ));
        assert!(matches!(
            WhatsAppNumber::parse(""),
            Err(DeepLinkError::DigitCount { digits: 0, .. })
        ));
    }

    #[test]
    fn test_link_without_text() {
        assert_eq!(whatsapp_link(&number(), None), "https://wa.me/27727389214");
        assert_eq!(whatsapp_link(&number(), Some("")), "https://wa.me/27727389214");
    }

    #[test]
    fn test_link_percent_encodes_text() {
        let link = whatsapp_link(&number(), Some("Please pray with me & my family?"));
        assert_eq!(
            link,
            "https://wa.me/27727389214?text=Please%20pray%20with%20me%20%26%20my%20family%3F"
        );
    }

    #[test]
    fn test_link_encodes_newlines_and_emoji() {
        let link = whatsapp_link(&number(), Some(QUICK_MESSAGES[0]));
        assert!(link.ends_with("%F0%9F%99%8F"), "{link}");
        assert!(!link.contains(' '));

        let multiline = whatsapp_link(&number(), Some("a\nb"));
        assert!(multiline.ends_with("text=a%0Ab"));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(
            mailto_link("prayer@example.org", None, None),
            "mailto:prayer@example.org"
        );
        assert_eq!(
            mailto_link("prayer@example.org", Some("Prayer request"), Some("")),
            "mailto:prayer@example.org?subject=Prayer%20request"
        );
        assert_eq!(
            mailto_link("a@b.c", Some("Hi"), Some("x=y")),
            "mailto:a@b.c?subject=Hi&body=x%3Dy"
        );
    }
}
