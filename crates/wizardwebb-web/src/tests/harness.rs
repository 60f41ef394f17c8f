use std::fs;

use axum::{
    Router,
    body::{Body, to_bytes},
    response::Response,
};
use tower::util::ServiceExt;

use wizardwebb_core::Catalog;

use crate::{WebState, app_router};

pub(super) const CATALOG_YAML: &str = r#"
- id: ddg
  name: DuckDuckGo
  url: https://duckduckgo.com
  description: Private web search
  category: Search
  tags: [search, privacy]
- id: wayback
  name: Wayback Machine
  url: https://web.archive.org
  description: Archived snapshots of web pages
  category: Research
  tags: [archive]
- id: dossier
  name: Dossier <Beta>
  description: People search, not public yet
  category: OSINT
  status: omitted
- id: tracker
  name: Tracker Lookup
  url: https://example.org/tracker
  category: Security & Privacy
  status: paywalled
  note: Requires an account
"#;

pub(super) struct TestHarness {
    _temp: tempfile::TempDir,
    pub(super) state: WebState,
    pub(super) router: Router,
}

impl TestHarness {
    pub(super) fn setup() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("links.yml");
        fs::write(&path, CATALOG_YAML).expect("seed catalog");
        let catalog = Catalog::load(&path).expect("load catalog");

        let state = WebState::new(catalog, "WizardWebb");
        let router = app_router(state.clone());
        Self {
            _temp: temp,
            state,
            router,
        }
    }

    pub(super) async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response")
    }

    pub(super) async fn post_json(&self, path: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(json_request(path, &body))
            .await
            .expect("response")
    }
}

pub(super) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    serde_json::from_slice(&bytes).expect("decode json")
}

pub(super) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub(super) fn header_value<'a>(headers: &'a axum::http::HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}

fn json_request(path: &str, body: &serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(body).expect("json request body"),
        ))
        .expect("json request")
}
