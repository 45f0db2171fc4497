//! Content validator.
//!
//! Pure regex scans over posted/edited text. The first pass rejects
//! contact information (phone numbers, email addresses, URLs with a
//! scheme, bare `www.` URLs); the second pass rejects SQL-injection and
//! script/XSS patterns. Superuser authors bypass every check. No external
//! calls are made.

use std::sync::LazyLock;

use regex::Regex;

/// Category-specific rejection produced by [`validate_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentViolation {
    #[error("Content cannot contain phone numbers")]
    PhoneNumber,
    #[error("Content cannot contain email addresses")]
    EmailAddress,
    #[error("Content cannot contain website URLs")]
    Url,
    #[error("Content contains SQL injection patterns")]
    SqlInjection,
    #[error("Content contains cross-site scripting (XSS) patterns")]
    Script,
}

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d -]{8,}\d").expect("phone pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").expect("email pattern")
});

// Two redundant URL patterns: one requires a scheme, one a bare "www."
// prefix. Whitespace is tolerated around dots to catch obfuscated hosts.
static URL_WITH_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?(?:[a-zA-Z0-9\-]+\s*\.\s*)+[a-zA-Z]{2,}\S*")
        .expect("url pattern")
});

static URL_BARE_WWW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"www\.(?:[a-zA-Z0-9\-]+\s*\.\s*)+[a-zA-Z]{2,}\S*").expect("www url pattern")
});

static SQL_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(UNION|SELECT|INSERT|UPDATE|DELETE)\b").expect("sql keyword pattern")
});

static SQL_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(--|#|/\*|\*/)").expect("sql comment pattern"));

static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script tag pattern"));

static JS_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\w+="javascript:"#).expect("js attribute pattern"));

/// Scan `text` for contact information and malicious patterns.
///
/// Superuser authors bypass all checks. The first matching category wins;
/// categories are checked in the order phone, email, URL, SQL, script.
pub fn validate_content(text: &str, author_is_superuser: bool) -> Result<(), ContentViolation> {
    if author_is_superuser {
        return Ok(());
    }

    if PHONE.is_match(text) {
        return Err(ContentViolation::PhoneNumber);
    }
    if EMAIL.is_match(text) {
        return Err(ContentViolation::EmailAddress);
    }
    if URL_WITH_SCHEME.is_match(text) || URL_BARE_WWW.is_match(text) {
        return Err(ContentViolation::Url);
    }
    if SQL_KEYWORDS.is_match(text) || SQL_COMMENT.is_match(text) {
        return Err(ContentViolation::SqlInjection);
    }
    if SCRIPT_TAG.is_match(text) || JS_ATTRIBUTE.is_match(text) {
        return Err(ContentViolation::Script);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_accepted() {
        let text = "How do I make a borrow checker error go away politely?";
        assert_eq!(validate_content(text, false), Ok(()));
    }

    #[test]
    fn test_phone_number_rejected() {
        let text = "Call me at 555-123-4567";
        assert_eq!(
            validate_content(text, false),
            Err(ContentViolation::PhoneNumber)
        );
        assert_eq!(
            validate_content("+44 1234 567 890 is my number", false),
            Err(ContentViolation::PhoneNumber)
        );
    }

    #[test]
    fn test_superuser_bypasses_all_checks() {
        assert_eq!(validate_content("Call me at 555-123-4567", true), Ok(()));
        assert_eq!(
            validate_content("<script>alert(1)</script>", true),
            Ok(())
        );
    }

    #[test]
    fn test_email_rejected() {
        assert_eq!(
            validate_content("reach me at someone@example.com thanks", false),
            Err(ContentViolation::EmailAddress)
        );
    }

    #[test]
    fn test_urls_rejected_by_both_patterns() {
        assert_eq!(
            validate_content("see https://example.com/docs", false),
            Err(ContentViolation::Url)
        );
        assert_eq!(
            validate_content("see www.example.com for more", false),
            Err(ContentViolation::Url)
        );
    }

    #[test]
    fn test_sql_patterns_rejected() {
        assert_eq!(
            validate_content("'; SELECT * FROM users", false),
            Err(ContentViolation::SqlInjection)
        );
        assert_eq!(
            validate_content("nothing to see /* here */", false),
            Err(ContentViolation::SqlInjection)
        );
    }

    #[test]
    fn test_xss_patterns_rejected() {
        assert_eq!(
            validate_content("<script>alert('hi')</script>", false),
            Err(ContentViolation::Script)
        );
        assert_eq!(
            validate_content(r#"<a href="javascript:evil()">x</a>"#, false),
            Err(ContentViolation::Script)
        );
    }
}
