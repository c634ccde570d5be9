//! Request path normalization.

/// Normalize a browser path before route matching.
///
/// Drops any query string or fragment, collapses repeated slashes, strips a
/// trailing slash (root stays `/`) and guarantees a leading slash.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let segments: Vec<&str> = raw[..end].split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return "/".to_owned();
    }

    let mut out = String::with_capacity(end + 1);
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variants_collapse_to_slash() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/?ref=home"), "/");
    }

    #[test]
    fn strips_trailing_slash_and_duplicates() {
        assert_eq!(normalize_path("/docs/"), "/docs");
        assert_eq!(normalize_path("//docs//api/"), "/docs/api");
    }

    #[test]
    fn drops_query_and_fragment() {
        assert_eq!(normalize_path("/user?tab=keys"), "/user");
        assert_eq!(normalize_path("/docs#color"), "/docs");
    }

    #[test]
    fn adds_missing_leading_slash() {
        assert_eq!(normalize_path("login"), "/login");
    }
}
