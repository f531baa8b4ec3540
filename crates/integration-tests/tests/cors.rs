//! CORS behavior of the assembled router

mod harness;

use harness::config::ConfigBuilder;
use harness::mock_upstream::MockUpstream;
use harness::server::TestServer;

#[tokio::test]
async fn preflight_allows_any_origin_by_default() {
    let mock = MockUpstream::start().await.unwrap();
    let config = ConfigBuilder::new().with_stt(&mock.stt_base_url()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/transcribe"))
        .header("Origin", "https://frontend.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn simple_request_carries_cors_header() {
    let mock = MockUpstream::start().await.unwrap();
    let config = ConfigBuilder::new().with_stt(&mock.stt_base_url()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "https://frontend.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
