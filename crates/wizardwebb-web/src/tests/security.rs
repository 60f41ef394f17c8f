use axum::http::{StatusCode, header::CONTENT_TYPE};

use super::harness::{TestHarness, body_text, header_value};

#[tokio::test]
async fn web_responses_include_security_headers() {
    let harness = TestHarness::setup();

    let index = harness.get("/").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(
        header_value(index.headers(), "x-content-type-options"),
        Some("nosniff")
    );
    assert_eq!(header_value(index.headers(), "x-frame-options"), Some("DENY"));
    assert_eq!(
        header_value(index.headers(), "referrer-policy"),
        Some("no-referrer")
    );
    let csp = header_value(index.headers(), "content-security-policy")
        .expect("csp header")
        .to_string();
    assert!(csp.contains("default-src 'self'"));
    assert!(csp.contains("frame-ancestors 'none'"));
    assert!(!csp.contains("'unsafe-inline'"));

    let index_html = body_text(index).await;
    assert!(index_html.contains("/assets/index.css"));
    assert!(index_html.contains("/assets/index.js"));
    assert!(!index_html.contains("style=\""));
    assert!(!index_html.contains("<script>"));

    let api = harness.get("/api/links").await;
    assert_eq!(
        header_value(api.headers(), "x-content-type-options"),
        Some("nosniff")
    );
    assert!(header_value(api.headers(), "content-security-policy").is_some());
}

#[tokio::test]
async fn assets_are_served_with_content_types() {
    let harness = TestHarness::setup();

    let css = harness.get("/assets/index.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(
        header_value(css.headers(), CONTENT_TYPE.as_str()),
        Some("text/css; charset=utf-8")
    );

    let js = harness.get("/assets/index.js").await;
    assert_eq!(js.status(), StatusCode::OK);
    assert_eq!(
        header_value(js.headers(), CONTENT_TYPE.as_str()),
        Some("application/javascript; charset=utf-8")
    );
    let script = body_text(js).await;
    assert!(script.contains("/api/view"));
}
