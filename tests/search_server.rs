//! End-to-end tests: a real bound server in front of a mock provider.

use chatra_shayak::config::{ServerConfig, UiConfig};
use chatra_shayak::profile::ProfileField;
use chatra_shayak::{HttpBackend, Page, PageStep, SearchBackend, SearchProxy, SearchServer};
use scholar_search::{ProviderConfig, StaticCredential, TavilyProvider};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_server(provider: &MockServer, ui: UiConfig) -> SearchServer {
    let config = ProviderConfig::default().with_endpoint(format!("{}/search", provider.uri()));
    let tavily = TavilyProvider::new(config, Arc::new(StaticCredential::new("tvly-test")))
        .expect("provider");
    let listen = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
    };
    SearchServer::start(&listen, SearchProxy::new(Arc::new(tavily)), ui)
        .await
        .expect("server should start")
}

async fn post_search(server: &SearchServer, body: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/search", server.url()))
        .header("content-type", "application/json")
        .body(body.to_owned())
        .send()
        .await
        .expect("request");
    let status = response.status().as_u16();
    let body = response.json().await.expect("json body");
    (status, body)
}

fn sample_results() -> Vec<Value> {
    vec![
        json!({
            "title": "Post Matric Scholarship for SC Students",
            "url": "https://scholarships.gov.in/pms-sc",
            "content": "Financial assistance for SC students",
            "score": 0.93,
            "raw_content": null
        }),
        json!({
            "title": "Buddy4Study Merit Scholarship",
            "url": "https://www.buddy4study.com/merit",
            "content": "Merit-based support"
        }),
    ]
}

#[tokio::test]
async fn empty_or_missing_query_is_rejected_without_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;

    for body in [r#"{"query":""}"#, "{}"] {
        let (status, reply) = post_search(&server, body).await;
        assert_eq!(status, 400);
        assert_eq!(reply, json!({"error": "Query is required"}));
    }
}

#[tokio::test]
async fn provider_results_pass_through_unmodified() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("authorization", "Bearer tvly-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Several schemes apply.",
            "results": sample_results()
        })))
        .expect(1)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;

    let (status, reply) = post_search(&server, r#"{"query":"SC scholarships"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(reply, json!({ "results": sample_results() }));
}

#[tokio::test]
async fn provider_failure_status_is_relayed_with_details() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"detail": "service unavailable"})),
        )
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;

    let (status, reply) = post_search(&server, r#"{"query":"q"}"#).await;
    assert_eq!(status, 503);
    assert_eq!(reply["error"], "Failed to fetch scholarships");
    assert_eq!(reply["details"], json!({"detail": "service unavailable"}));
}

#[tokio::test]
async fn provider_error_without_json_body_is_internal_error() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;

    let (status, reply) = post_search(&server, r#"{"query":"q"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(reply, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn malformed_request_body_is_internal_error() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;

    let (status, reply) = post_search(&server, "{not json").await;
    assert_eq!(status, 500);
    assert_eq!(reply, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn terminal_flow_reaches_results_over_http() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": sample_results() })),
        )
        .expect(1)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;
    let backend = HttpBackend::new(&server.url()).expect("backend");

    let mut page = Page::new(UiConfig::default());
    assert!(page.start());
    for field in ProfileField::ALL.into_iter().filter(|f| f.is_required()) {
        page.edit(field, "Any");
    }
    assert!(page.next());
    page.submit(&backend).await;

    assert_eq!(page.step(), PageStep::Results);
    let view = page.results_view();
    assert_eq!(view.cards().len(), 2);
    assert_eq!(view.cards()[0].badge, "Relevance: 93%");
    assert_eq!(view.cards()[1].host, "buddy4study.com");
}

#[tokio::test]
async fn result_with_null_title_still_gets_a_card() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [
            {"title": null, "url": "https://scholarships.gov.in/x", "content": "Untitled scheme"},
            {"title": "Titled", "url": "https://www.buddy4study.com/t", "content": "t", "score": 0.4}
        ]})))
        .expect(1)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;
    let backend = HttpBackend::new(&server.url()).expect("backend");

    let results = backend.search("anything").await.expect("json reply");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "");
    assert_eq!(results[0].content, "Untitled scheme");
    assert_eq!(results[1].title, "Titled");
}

#[tokio::test]
async fn relayed_error_without_results_shows_empty_state() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad key"})))
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;
    let backend = HttpBackend::new(&server.url()).expect("backend");

    let results = backend.search("anything").await.expect("json reply");
    assert!(results.is_empty());
}

#[tokio::test]
async fn page_posts_walk_landing_form_results() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": sample_results() })),
        )
        .expect(1)
        .mount(&provider)
        .await;
    let server = start_server(&provider, UiConfig::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/", server.url());

    let landing = client.get(&url).send().await.expect("get").text().await.expect("text");
    assert!(landing.contains("Chatra Shayak"));
    assert!(landing.contains(r#"value="start""#));

    let form = client
        .post(&url)
        .form(&[("page", "landing"), ("event", "start")])
        .send()
        .await
        .expect("post")
        .text()
        .await
        .expect("text");
    assert!(form.contains("Step 1 of 2: Personal Details"));

    let blocked = client
        .post(&url)
        .form(&[("page", "form"), ("wizardStep", "1"), ("age", "20"), ("event", "next")])
        .send()
        .await
        .expect("post")
        .text()
        .await
        .expect("text");
    assert!(blocked.contains("Step 1 of 2"));
    assert!(blocked.contains("This field is required"));

    let mut fields: Vec<(&str, &str)> = vec![("page", "form"), ("wizardStep", "2")];
    for field in ProfileField::ALL.into_iter().filter(|f| f.is_required()) {
        fields.push((field.name(), "Any"));
    }
    fields.push(("event", "submit"));
    let results = client
        .post(&url)
        .form(&fields)
        .send()
        .await
        .expect("post")
        .text()
        .await
        .expect("text");
    assert!(results.contains("Search Summary"));
    assert!(results.contains("Post Matric Scholarship for SC Students"));
    assert!(results.contains("Relevance: 93%"));
    assert!(results.contains(">buddy4study.com</a>"));
}

#[tokio::test]
async fn health_reports_ok() {
    let provider = MockServer::start().await;
    let server = start_server(&provider, UiConfig::default()).await;
    let body: Value = reqwest::get(format!("{}/health", server.url()))
        .await
        .expect("get")
        .json()
        .await
        .expect("json");
    assert_eq!(body["status"], "ok");
}
