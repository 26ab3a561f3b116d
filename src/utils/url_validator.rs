//! Syntactic URL validation.

use url::Url;

/// Returns `true` if `candidate` is an absolute URL with a scheme and a host.
///
/// Validation is purely syntactic: no DNS lookup, no scheme allow-list.
/// `ftp://x` is accepted, `mailto:user@example.com` is not (it has no host).
///
/// The candidate is stored verbatim, so it must already be in request-URI
/// form: the scheme is followed by `://`, with no surrounding whitespace and
/// no control characters. The WHATWG parser would otherwise repair inputs
/// such as `https:example.com` or `" https://example.com "` and accept them.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.trim() != candidate || candidate.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    let has_authority = candidate
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));

    has_authority && !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty())
}
