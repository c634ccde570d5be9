use super::*;

#[test]
fn defaults_to_same_origin_and_info() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.log_level, log::Level::Info);
    assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_vars(Some("https://api.example.test/ "), None, None);
    assert_eq!(cfg.api_base, "https://api.example.test");
    assert_eq!(cfg.api_url("/api/auth/user"), "https://api.example.test/api/auth/user");
}

#[test]
fn same_origin_api_url_is_path_only() {
    assert_eq!(ClientConfig::default().api_url("/random/boolean"), "/random/boolean");
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(parse_log_level(Some("DEBUG")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" warn ")), log::Level::Warn);
}

#[test]
fn unknown_log_level_falls_back_to_default() {
    assert_eq!(parse_log_level(Some("loud")), DEFAULT_LOG_LEVEL);
    assert_eq!(parse_log_level(None), DEFAULT_LOG_LEVEL);
}

#[test]
fn blank_source_url_uses_default() {
    let cfg = ClientConfig::from_vars(None, None, Some("  "));
    assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
    let cfg = ClientConfig::from_vars(None, None, Some("https://git.example.test/rlarndg"));
    assert_eq!(cfg.source_url, "https://git.example.test/rlarndg");
}
