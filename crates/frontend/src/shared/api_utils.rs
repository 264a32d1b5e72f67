//! URL helpers for backend requests

/// Origin of the current page, used when no API host is configured
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://admin.example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and an absolute path without doubling the slash
/// ("http://erp.local/", "/api/customers") -> "http://erp.local/api/customers"
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path segment with reserved characters escaped (record ids come from the server)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a:5000", "/api/x"), "http://a:5000/api/x");
        assert_eq!(join_url("http://a:5000/", "api/x"), "http://a:5000/api/x");
        assert_eq!(join_url("", "/api/x"), "/api/x");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("65f0c1"), "65f0c1");
        assert_eq!(path_segment("a/b"), "a%2Fb");
    }
}
