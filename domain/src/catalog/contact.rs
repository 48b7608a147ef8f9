//! Contact info and link building
//!
//! The telegram handle is stored exactly as configured (a leading "@" is
//! allowed). Links strip the "@"; the copy action uses the raw string.

use serde::{Deserialize, Serialize};

/// Contact call-to-action data: a telegram handle and an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    pub telegram: String,
    pub email: String,
}

impl ContactInfo {
    pub fn new(telegram: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            telegram: telegram.into(),
            email: email.into(),
        }
    }

    /// Telegram handle without a leading "@", trimmed
    pub fn telegram_handle(&self) -> &str {
        self.telegram.strip_prefix('@').unwrap_or(&self.telegram).trim()
    }

    /// Deep link to the telegram profile.
    ///
    /// An empty handle degrades to the bare host rather than failing.
    pub fn telegram_url(&self) -> String {
        let handle = self.telegram_handle();
        if handle.is_empty() {
            "https://t.me/".to_string()
        } else {
            format!("https://t.me/{}", handle)
        }
    }

    /// Mailto link for the email address
    pub fn email_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_url_strips_at() {
        let contact = ContactInfo::new("@ivanov", "x@example.com");
        assert_eq!(contact.telegram_url(), "https://t.me/ivanov");
        // The stored handle keeps the "@" for the copy action
        assert_eq!(contact.telegram, "@ivanov");
    }

    #[test]
    fn test_telegram_url_without_at() {
        let contact = ContactInfo::new("ivanov", "x@example.com");
        assert_eq!(contact.telegram_url(), "https://t.me/ivanov");
    }

    #[test]
    fn test_empty_handle_falls_back_to_bare_host() {
        let contact = ContactInfo::new("", "x@example.com");
        assert_eq!(contact.telegram_url(), "https://t.me/");

        let at_only = ContactInfo::new("@", "x@example.com");
        assert_eq!(at_only.telegram_url(), "https://t.me/");
    }

    #[test]
    fn test_handle_is_trimmed() {
        let contact = ContactInfo::new("@ivanov  ", "x@example.com");
        assert_eq!(contact.telegram_handle(), "ivanov");
        assert_eq!(contact.telegram_url(), "https://t.me/ivanov");
    }

    #[test]
    fn test_email_url() {
        let contact = ContactInfo::new("@x", "dev@example.com");
        assert_eq!(contact.email_url(), "mailto:dev@example.com");
    }
}
