use super::*;

#[test]
fn default_rules_accept_only_pdf() {
    let rules = UploadRules::default();
    assert!(rules.allows_type("application/pdf"));
    assert!(!rules.allows_type("image/png"));
    assert!(!rules.allows_type(""));
}

#[test]
fn default_rules_cap_at_twenty_mebibytes() {
    assert_eq!(UploadRules::default().max_bytes, 20 * 1024 * 1024);
}

#[test]
fn accept_attr_joins_allowed_types() {
    let rules = UploadRules {
        allowed_types: vec!["application/pdf".to_owned(), "text/plain".to_owned()],
        max_bytes: 1,
    };
    assert_eq!(rules.accept_attr(), "application/pdf,text/plain");
}

#[test]
fn ui_config_defaults_match_page_timings() {
    let config = UiConfig::default();
    assert_eq!(config.toast_duration_ms, 5_000);
    assert_eq!(config.toast_exit_ms, 300);
    assert_eq!(config.progress_tick_ms, 200);
    assert_eq!(config.progress_step, 10);
}

#[test]
fn current_falls_back_to_defaults_without_context() {
    assert_eq!(current(), UiConfig::default());
}
