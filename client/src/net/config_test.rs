use super::*;

#[test]
fn default_config_is_unconfigured() {
    let config = ApiConfig::default();
    assert_eq!(config, ApiConfig::unconfigured());
    assert!(!config.is_configured());
    assert_eq!(config.base_url(), None);
    assert_eq!(config.webhook_url(), None);
}

#[test]
fn new_keeps_plain_base_url() {
    let config = ApiConfig::new(Some("https://api.example.com"));
    assert!(config.is_configured());
    assert_eq!(config.base_url(), Some("https://api.example.com"));
}

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let config = ApiConfig::new(Some("  https://api.example.com//  "));
    assert_eq!(config.base_url(), Some("https://api.example.com"));
}

#[test]
fn new_treats_blank_as_unset() {
    assert!(!ApiConfig::new(Some("")).is_configured());
    assert!(!ApiConfig::new(Some("   ")).is_configured());
    assert!(!ApiConfig::new(Some("/")).is_configured());
    assert!(!ApiConfig::new(None).is_configured());
}

#[test]
fn webhook_url_appends_icebreaker_path() {
    let config = ApiConfig::new(Some("https://n8n.example.com"));
    assert_eq!(
        config.webhook_url().as_deref(),
        Some("https://n8n.example.com/webhook/icebreaker")
    );
}

#[test]
fn webhook_url_keeps_base_path_segments() {
    let config = ApiConfig::new(Some("http://localhost:5678/hooks/"));
    assert_eq!(
        config.webhook_url().as_deref(),
        Some("http://localhost:5678/hooks/webhook/icebreaker")
    );
}
