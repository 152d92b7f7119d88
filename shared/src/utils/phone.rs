//! Mobile number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// 11-digit mobile numbers for the supported carrier prefixes.
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[35678]\d{9}$").unwrap());

/// Check that a mobile number matches the canonical 11-digit pattern.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}

/// Mask a mobile number for logging (e.g. `138****1111`).
///
/// Counts characters, not bytes: the input is not always pattern-checked
/// first (error-log paths pass it through as received).
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() >= 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{prefix}****{suffix}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("13800001111"));
        assert!(is_valid_mobile("15912345678"));
        assert!(is_valid_mobile("17712345678"));
        assert!(is_valid_mobile("18612345678"));
        assert!(!is_valid_mobile("12812345678")); // unsupported prefix
        assert!(!is_valid_mobile("1380000111")); // too short
        assert!(!is_valid_mobile("138000011112")); // too long
        assert!(!is_valid_mobile("23800001111")); // wrong leading digit
        assert!(!is_valid_mobile("1380000111a")); // non-digit
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_mask_mobile() {
        assert_eq!(mask_mobile("13800001111"), "138****1111");
        assert_eq!(mask_mobile("12345"), "****");
        assert_eq!(mask_mobile(""), "****");
    }

    #[test]
    fn test_mask_mobile_non_ascii_input() {
        // Unvalidated input reaches the masker on error-log paths; it must
        // not panic on multi-byte characters.
        assert_eq!(mask_mobile("一三八零零零零一一一一"), "一三八****一一一一");
        assert_eq!(mask_mobile("１３８８"), "****");
    }
}
