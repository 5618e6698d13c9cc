//! Log sanitization utilities.
//!
//! Response bodies can embed page access tokens and user ids; debug logs must
//! never carry a full credential.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an access token for logging: keep a short recognizable prefix, hide
/// the rest. Tokens shorter than the prefix are fully masked.
pub fn mask_token(token: &str) -> String {
    const VISIBLE_PREFIX: usize = 6;
    if token.len() <= VISIBLE_PREFIX {
        "***".to_string()
    } else {
        let end = floor_char_boundary(token, VISIBLE_PREFIX);
        format!("{}*** [{} bytes]", &token[..end], token.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // Truncation must not split multi-byte characters.
        let s = "你".repeat(200); // 3 bytes each
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn token_masked() {
        let masked = mask_token("EAABsbCS1234567890abcdef");
        assert!(masked.starts_with("EAABsb***"));
        assert!(!masked.contains("abcdef"));
    }

    #[test]
    fn tiny_token_fully_masked() {
        assert_eq!(mask_token("abc"), "***");
    }
}
