use super::*;
use clipper_protocols::{ContentBlock, DocumentProperties};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> NotionClientConfig {
    NotionClientConfig {
        token: "secret_test".to_string(),
        database_id: "db123".to_string(),
        api_base_url: base_url.to_string(),
        api_version: "2022-06-28".to_string(),
        payload: PayloadOptions::default(),
    }
}

fn test_document() -> Document {
    Document {
        properties: DocumentProperties {
            title: "ChatGPT Answer".to_string(),
            source_url: None,
            tags: Vec::new(),
            saved_at: "2024-05-01T12:30:45.000Z".to_string(),
        },
        blocks: vec![
            ContentBlock::paragraph("Hi"),
            ContentBlock::paragraph("Saved via ChatGPT → Notion (full)"),
        ],
    }
}

#[test]
fn test_pages_url_trims_trailing_slash() {
    let client = NotionClient::new(test_config("https://api.notion.com/v1/")).unwrap();
    assert_eq!(client.pages_url(), "https://api.notion.com/v1/pages");
}

#[test]
fn test_is_configured() {
    let client = NotionClient::new(test_config("https://api.notion.com/v1")).unwrap();
    assert!(client.is_configured());
    assert_eq!(client.id(), "notion");

    let mut config = test_config("https://api.notion.com/v1");
    config.token = String::new();
    let client = NotionClient::new(config).unwrap();
    assert!(!client.is_configured());
}

#[test]
fn test_config_from_app_config() {
    let mut config = Config::default();
    config.notion.token = "  secret_x  ".to_string();
    config.notion.database_id = "db".to_string();
    config.capture.include_timestamp = false;

    let client_config = NotionClientConfig::from(&config);
    assert_eq!(client_config.token, "secret_x");
    assert_eq!(client_config.api_version, "2022-06-28");
    assert!(!client_config.payload.include_timestamp);
    assert!(!format!("{:?}", client_config).contains("secret_x"));
}

#[tokio::test]
async fn test_submit_sends_headers_and_payload() {
    let mock_server = MockServer::start().await;
    let client = NotionClient::new(test_config(&format!("{}/v1", mock_server.uri()))).unwrap();
    let document = test_document();
    let expected_body = serde_json::to_value(client.build_request(&document)).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .and(header("authorization", "Bearer secret_test"))
        .and(header("notion-version", "2022-06-28"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "page",
            "id": "page-1",
            "url": "https://www.notion.so/page-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let receipt = client.submit(&document).await.unwrap();
    assert_eq!(receipt.page_id.as_deref(), Some("page-1"));
    assert_eq!(receipt.url.as_deref(), Some("https://www.notion.so/page-1"));
}

#[tokio::test]
async fn test_submit_error_status_reported_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"message\":\"bad\"}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NotionClient::new(test_config(&format!("{}/v1", mock_server.uri()))).unwrap();
    let err = client.submit(&test_document()).await.unwrap_err();

    match err {
        SubmitError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "400 Bad Request");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = NotionClient::new(test_config(&mock_server.uri())).unwrap();
    let err = client.submit(&test_document()).await.unwrap_err();
    assert_eq!(err.to_string(), "401 Unauthorized");
}

#[tokio::test]
async fn test_submit_success_with_unreadable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = NotionClient::new(test_config(&mock_server.uri())).unwrap();
    let receipt = client.submit(&test_document()).await.unwrap();
    assert_eq!(receipt, SubmitReceipt::default());
}

#[tokio::test]
async fn test_submit_transport_error() {
    // Nothing listens on port 9 of localhost.
    let client = NotionClient::new(test_config("http://127.0.0.1:9/v1")).unwrap();
    let err = client.submit(&test_document()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn test_submit_not_configured_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.database_id = String::new();
    let client = NotionClient::new(config).unwrap();

    let err = client.submit(&test_document()).await.unwrap_err();
    assert!(matches!(err, SubmitError::NotConfigured(_)));
}
