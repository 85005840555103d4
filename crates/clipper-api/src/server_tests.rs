use super::*;
use crate::test_support::stub_state;
use tokio::sync::oneshot;

#[test]
fn test_server_config_from_app_config() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8787);

    let (state, _, _) = stub_state(true, None);
    let server = ApiServer::new(ServerConfig::new("0.0.0.0", 3000), state);
    assert_eq!(server.addr(), "0.0.0.0:3000");
}

#[tokio::test]
async fn test_serve_until_shutdown() {
    let (state, submitter, _) = stub_state(true, None);
    let server = ApiServer::new(ServerConfig::default(), state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let client = async move {
        let http = reqwest::Client::new();
        let health: serde_json::Value = http
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let reply: serde_json::Value = http
            .post(format!("http://{}/v1/messages", addr))
            .json(&serde_json::json!({
                "type": "SAVE_TO_NOTION",
                "payload": { "answerText": "served" }
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let _ = shutdown_tx.send(());
        (health, reply)
    };

    let shutdown = async move {
        let _ = shutdown_rx.await;
    };

    let (served, (health, reply)) = tokio::join!(server.serve(listener, shutdown), client);

    assert!(served.is_ok());
    assert_eq!(health["status"], "ok");
    assert_eq!(reply["ok"], true);
    assert_eq!(submitter.calls(), 1);
}
