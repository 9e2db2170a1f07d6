use futures::executor::block_on;

use super::test_helpers::MockTransport;
use super::*;

const BASE: &str = "https://hooks.example.com";
const OK_BODY: &str = r#"{"icebreaker":"Hi!","source":"blog","company_summary":"We build widgets."}"#;

fn request() -> IcebreakerRequest {
    IcebreakerRequest { company_name: "Acme".to_owned(), website_url: "https://acme.test".to_owned() }
}

fn api(transport: MockTransport) -> IcebreakerApi<MockTransport> {
    IcebreakerApi::new(ApiConfig::new(Some(BASE)), transport)
}

// =============================================================
// generate
// =============================================================

#[test]
fn generate_posts_json_to_webhook_url() {
    let api = api(MockTransport::replying(200, "OK", OK_BODY));
    block_on(api.generate(&request())).unwrap();

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://hooks.example.com/webhook/icebreaker");
    let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
    assert_eq!(body, serde_json::json!({ "company_name": "Acme", "website_url": "https://acme.test" }));
}

#[test]
fn generate_parses_success_body() {
    let api = api(MockTransport::replying(200, "OK", OK_BODY));
    let result = block_on(api.generate(&request())).unwrap();
    assert_eq!(result.icebreaker, "Hi!");
    assert_eq!(result.source, "blog");
    assert_eq!(result.company_summary, "We build widgets.");
}

#[test]
fn generate_accepts_any_2xx_status() {
    let api = api(MockTransport::replying(201, "Created", OK_BODY));
    assert!(block_on(api.generate(&request())).is_ok());
}

#[test]
fn generate_without_base_url_sends_nothing() {
    let api = IcebreakerApi::new(ApiConfig::unconfigured(), MockTransport::replying(200, "OK", OK_BODY));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert_eq!(err, SubmitError::NotConfigured);
    assert_eq!(err.to_string(), "API URL is not configured");
    assert!(api.transport().calls().is_empty());
}

#[test]
fn generate_non_2xx_reports_status_text() {
    let api = api(MockTransport::replying(500, "Internal Server Error", "oops"));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert_eq!(err.to_string(), "Request failed: Internal Server Error");
    assert!(matches!(err, SubmitError::Request { status: 500, .. }));
}

#[test]
fn generate_redirect_status_is_a_request_error() {
    let api = api(MockTransport::replying(302, "Found", ""));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert_eq!(err.to_string(), "Request failed: Found");
}

#[test]
fn generate_network_failure_surfaces_message() {
    let api = api(MockTransport::failing("TypeError: Failed to fetch"));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    assert_eq!(err.code(), "E_TRANSPORT");
}

#[test]
fn generate_invalid_json_is_transport_error() {
    let api = api(MockTransport::replying(200, "OK", "<html>not json</html>"));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn generate_array_body_is_transport_error() {
    let api = api(MockTransport::replying(200, "OK", r#"["Hi","blog","sum"]"#));
    let err = block_on(api.generate(&request())).unwrap_err();
    assert_eq!(err, SubmitError::Transport(NOT_AN_OBJECT_MESSAGE.to_owned()));
}

#[test]
fn generate_scalar_json_body_is_transport_error() {
    for body in ["\"Hi!\"", "null", "7"] {
        let api = api(MockTransport::replying(200, "OK", body));
        let err = block_on(api.generate(&request())).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)), "expected transport error for {body}");
    }
}

#[test]
fn parse_result_body_accepts_sparse_object() {
    let result = parse_result_body(r#"{"icebreaker":"Hey"}"#).unwrap();
    assert_eq!(result.icebreaker, "Hey");
    assert_eq!(result.source_text(), None);
}

// =============================================================
// SubmitError
// =============================================================

#[test]
fn transport_error_without_message_uses_fallback() {
    assert_eq!(SubmitError::Transport(String::new()).to_string(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(SubmitError::Transport("  ".to_owned()).to_string(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn submit_error_codes_are_distinct() {
    let codes = [
        SubmitError::NotConfigured.code(),
        SubmitError::Request { status: 404, status_text: "Not Found".to_owned() }.code(),
        SubmitError::Transport("x".to_owned()).code(),
    ];
    assert_ne!(codes[0], codes[1]);
    assert_ne!(codes[0], codes[2]);
    assert_ne!(codes[1], codes[2]);
}

#[test]
fn webhook_response_ok_covers_2xx_only() {
    let response = |status| WebhookResponse { status, status_text: String::new(), body: String::new() };
    assert!(response(200).ok());
    assert!(response(299).ok());
    assert!(!response(199).ok());
    assert!(!response(300).ok());
    assert!(!response(404).ok());
}
