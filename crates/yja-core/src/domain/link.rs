//! Link sanitizer - turns user-supplied links into safe hyperlink targets.

use url::Url;

/// Placeholder returned for anything that is not a parsable http(s) URL.
pub const PLACEHOLDER: &str = "#";

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Parse `raw` as an absolute URL and return its canonical form,
/// or [`PLACEHOLDER`] when it does not parse or uses another scheme.
pub fn sanitize(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => url.into(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_canonicalized() {
        assert_eq!(sanitize("https://www.yja.org/education"), "https://www.yja.org/education");
        assert_eq!(sanitize("HTTP://YJA.org"), "http://yja.org/");
        assert_eq!(sanitize("https://yja.org/a b"), "https://yja.org/a%20b");
    }

    #[test]
    fn test_script_schemes_are_neutralized() {
        assert_eq!(sanitize("javascript:alert(1)"), PLACEHOLDER);
        assert_eq!(sanitize("data:text/html,<b>x</b>"), PLACEHOLDER);
        assert_eq!(sanitize("ftp://yja.org/file"), PLACEHOLDER);
        assert_eq!(sanitize("mailto:team@yja.org"), PLACEHOLDER);
    }

    #[test]
    fn test_malformed_input_is_neutralized() {
        assert_eq!(sanitize(""), PLACEHOLDER);
        assert_eq!(sanitize("not a url"), PLACEHOLDER);
        assert_eq!(sanitize("/relative/path"), PLACEHOLDER);
        assert_eq!(sanitize("https://"), PLACEHOLDER);
    }

    #[test]
    fn test_output_is_placeholder_or_http_url() {
        let inputs = [
            "https://yja.org",
            "http://[::1]:8080/x?q=1#frag",
            "javascript://%0aalert(1)",
            "  https://yja.org  ",
            "https://exa mple.com",
            "\u{0}",
        ];

        for raw in inputs {
            let out = sanitize(raw);
            if out != PLACEHOLDER {
                let url = Url::parse(&out).unwrap();
                assert!(ALLOWED_SCHEMES.contains(&url.scheme()), "{raw} -> {out}");
            }
        }
    }
}
