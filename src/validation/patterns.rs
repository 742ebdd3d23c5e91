//! Validation patterns
//!
//! Regex patterns and character-class predicates shared by the rule
//! sets.

use std::sync::LazyLock;

use regex::Regex;

/// Usernames are plain alphanumerics, no whitespace or specials.
pub static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid regex"));

/// RFC-lite email shape: local part, @, domain labels, 2-4 letter TLD.
pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("Invalid regex")
});

/// Characters that satisfy the password special-character rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// True if `text` contains at least one ASCII uppercase letter.
pub fn has_uppercase(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
}

/// True if `text` contains at least one ASCII lowercase letter.
pub fn has_lowercase(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_lowercase())
}

/// True if `text` contains at least one decimal digit.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// True if `text` contains at least one character from
/// [`PASSWORD_SPECIALS`].
pub fn has_special(text: &str) -> bool {
    text.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_pattern() {
        assert!(USERNAME_RE.is_match("alice"));
        assert!(USERNAME_RE.is_match("Alice42"));
        assert!(!USERNAME_RE.is_match("alice smith"));
        assert!(!USERNAME_RE.is_match("alice_smith"));
        assert!(!USERNAME_RE.is_match("alice!"));
        assert!(!USERNAME_RE.is_match(""));
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_RE.is_match("user@mail.com"));
        assert!(EMAIL_RE.is_match("first.last+tag@sub.domain.org"));
        assert!(EMAIL_RE.is_match("u%x-1@a-b.co"));
        assert!(!EMAIL_RE.is_match("no-at-symbol"));
        assert!(!EMAIL_RE.is_match("user@domain"));
        assert!(!EMAIL_RE.is_match("user@domain.c"));
        // TLDs longer than four letters fall outside the pattern
        assert!(!EMAIL_RE.is_match("user@domain.museum"));
        assert!(!EMAIL_RE.is_match("user@@domain.com"));
    }

    #[test]
    fn test_character_classes() {
        assert!(has_uppercase("aBc"));
        assert!(!has_uppercase("abc1!"));
        assert!(has_lowercase("AbC"));
        assert!(!has_lowercase("ABC1!"));
        assert!(has_digit("abc1"));
        assert!(!has_digit("abcd!"));
        assert!(has_special("abc!"));
        assert!(has_special("a:b"));
        assert!(!has_special("abc1"));
        // Dash and underscore are not in the accepted special set
        assert!(!has_special("a-b_c"));
    }
}
