/// Keeps only the digits of a phone field and caps it at the 10 the webhook
/// expects. Runs on every keystroke so the stored value is always a clean
/// prefix.
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect()
}

/// Normalizes the audit URL field to a bare host(+path): drops one leading
/// `http://`/`https://` and one leading `www.`. Anything deeper in the path
/// is left alone.
pub fn sanitize_url_input(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    without_www.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_strips_separators() {
        assert_eq!(sanitize_phone_input("06 12 34 56 78"), "0612345678");
        assert_eq!(sanitize_phone_input("06.12.34.56.78"), "0612345678");
        assert_eq!(sanitize_phone_input("+33 6 12 34 56 78"), "3361234567");
    }

    #[test]
    fn phone_truncates_to_ten_digits() {
        assert_eq!(sanitize_phone_input("061234567890123"), "0612345678");
    }

    #[test]
    fn phone_keeps_partial_input_as_is() {
        // intermediate keystroke states stay digit-only prefixes
        assert_eq!(sanitize_phone_input("06 1"), "061");
        assert_eq!(sanitize_phone_input(""), "");
        assert_eq!(sanitize_phone_input("abc"), "");
    }

    #[test]
    fn url_strips_scheme_and_www() {
        assert_eq!(sanitize_url_input("https://www.example.com"), "example.com");
        assert_eq!(sanitize_url_input("http://example.com"), "example.com");
        assert_eq!(sanitize_url_input("www.example.com"), "example.com");
        assert_eq!(sanitize_url_input("example.com"), "example.com");
    }

    #[test]
    fn url_strips_prefixes_once_only() {
        assert_eq!(sanitize_url_input("https://www.www.example.com"), "www.example.com");
        assert_eq!(sanitize_url_input("example.com/www.page"), "example.com/www.page");
        assert_eq!(sanitize_url_input("http://example.com/https://other"), "example.com/https://other");
    }

    #[test]
    fn url_trims_whitespace() {
        assert_eq!(sanitize_url_input("  https://monsite.fr  "), "monsite.fr");
    }

    #[test]
    fn url_handles_partial_scheme_typing() {
        // while the user is still typing the scheme nothing is stripped yet
        assert_eq!(sanitize_url_input("http:/"), "http:/");
        assert_eq!(sanitize_url_input("ww"), "ww");
    }
}
