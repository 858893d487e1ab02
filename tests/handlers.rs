//! Handler-level tests using tower::ServiceExt::oneshot.
//!
//! Upstream pages and playlists are served by wiremock; the router runs
//! without binding a listener.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vixstream::{Config, server::create_router};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

async fn get(config: Config, uri: &str) -> Response {
    let app = create_router(config).unwrap();
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

async fn body_text(resp: Response) -> String {
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// ── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200_with_json() {
    let resp = get(test_config(), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// ── Input validation ────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_url_is_bad_request() {
    for uri in [
        "/api/v1/vixcloud/manifest",
        "/api/v1/vixcloud/manifest?url=",
        "/api/v1/vixcloud/secondary",
    ] {
        let resp = get(test_config(), uri).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let json = body_json(resp).await;
        assert_eq!(json["code"], "MISSING_URL");
        assert_eq!(json["error"], "Missing URL parameter");
    }
}

#[tokio::test]
async fn unsupported_source_is_server_error() {
    let uri = format!(
        "/api/v1/vixcloud/manifest?url={}",
        urlencoding::encode("https://example.com/watch/1")
    );
    let resp = get(test_config(), &uri).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "UNSUPPORTED_SOURCE");
}

#[tokio::test]
async fn blank_url_reaches_resolver() {
    let resp = get(test_config(), "/api/v1/vixcloud/manifest?url=%20").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "UNSUPPORTED_SOURCE");
}

// ── Main manifest ───────────────────────────────────────────────────────────

#[tokio::test]
async fn main_manifest_points_at_secondary_endpoint() {
    let server = MockServer::start().await;
    let source = format!("{}/movie/550", server.uri());

    let page = format!(
        "<script>params: {{ 'token': 'abc', 'expires': '999' }}, url: '{}/playlist/550'</script>",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let master = "#EXTM3U\n\
                  #EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"audio\",URI=\"/playlist/550?type=audio\"\n\
                  #EXT-X-STREAM-INF:BANDWIDTH=1200000,AUDIO=\"audio\"\n\
                  /playlist/550?type=video&rendition=720p\n";
    Mock::given(method("GET"))
        .and(path("/playlist/550"))
        .and(query_param("token", "abc"))
        .and(query_param("expires", "999"))
        .and(header("referer", source.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(master))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!(
        "/api/v1/vixcloud/manifest?url={}",
        urlencoding::encode(&source)
    );
    let resp = get(test_config(), &uri).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).unwrap(),
        "application/vnd.apple.mpegurl"
    );

    let body = body_text(resp).await;
    let lines: Vec<&str> = body.split('\n').collect();
    let audio = format!("{}/playlist/550?type=audio", server.uri());
    let video = format!("{}/playlist/550?type=video&rendition=720p", server.uri());

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "#EXTM3U");
    assert_eq!(
        lines[1],
        format!(
            "#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"audio\",URI=\"/api/v1/vixcloud/secondary?url={}\"",
            urlencoding::encode(&audio)
        )
    );
    assert_eq!(lines[2], "#EXT-X-STREAM-INF:BANDWIDTH=1200000,AUDIO=\"audio\"");
    assert_eq!(
        lines[3],
        format!("/api/v1/vixcloud/secondary?url={}", urlencoding::encode(&video))
    );
    assert_eq!(lines[4], "");
}

#[tokio::test]
async fn main_manifest_surfaces_resolver_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>no player</p>"))
        .mount(&server)
        .await;

    let uri = format!(
        "/api/v1/vixcloud/manifest?url={}",
        urlencoding::encode(&format!("{}/movie/1", server.uri()))
    );
    let resp = get(test_config(), &uri).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "TOKEN_NOT_FOUND");
    assert_eq!(json["error"], "token not found");
}

#[tokio::test]
async fn slow_upstream_fails_fast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let config = Config {
        request_timeout: Duration::from_millis(300),
        ..test_config()
    };
    let uri = format!(
        "/api/v1/vixcloud/manifest?url={}",
        urlencoding::encode(&format!("{}/movie/1", server.uri()))
    );

    let started = Instant::now();
    let resp = get(config, &uri).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < Duration::from_secs(5));

    let json = body_json(resp).await;
    let code = json["code"].as_str().unwrap();
    assert!(
        code == "DEADLINE_EXCEEDED" || code == "FETCH_TIMEOUT",
        "unexpected code {}",
        code
    );
}

#[tokio::test]
async fn deadline_spans_every_fetch_of_a_request() {
    let server = MockServer::start().await;
    let site = server.uri();
    let delay = Duration::from_millis(250);

    Mock::given(method("GET"))
        .and(path("/request-a-title"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<div id="app" data-page='{"version":"v1"}'></div>"#)
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/iframe/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"<iframe src="{}/embed/7"></iframe>"#, site))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/embed/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("'token': 'abc', 'expires': '999', url: 'https://cdn/x'")
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    // Each fetch fits within the timeout on its own; the three together do not.
    let config = Config {
        request_timeout: Duration::from_millis(450),
        ..test_config()
    };
    let uri = format!(
        "/api/v1/vixcloud/manifest?url={}",
        urlencoding::encode(&format!("{}/iframe/7", site))
    );

    let resp = get(config, &uri).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "DEADLINE_EXCEEDED");
}

// ── Secondary manifest ──────────────────────────────────────────────────────

#[tokio::test]
async fn secondary_manifest_points_at_relay() {
    let server = MockServer::start().await;

    let media = "#EXTM3U\n\
                 #EXT-X-TARGETDURATION:4\n\
                 #EXT-X-KEY:METHOD=AES-128,URI=\"/storage/enc.key\"\n\
                 #EXTINF:4.000,\n\
                 seg-1-v1-a1.ts\n\
                 #EXT-X-ENDLIST";
    Mock::given(method("GET"))
        .and(path("/hls/720p/index.m3u8"))
        .and(header("referer", "https://vixsrc.to/"))
        .and(header("origin", "https://vixsrc.to/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(media))
        .expect(1)
        .mount(&server)
        .await;

    let target = format!("{}/hls/720p/index.m3u8", server.uri());
    let uri = format!(
        "/api/v1/vixcloud/secondary?url={}",
        urlencoding::encode(&target)
    );
    let resp = get(test_config(), &uri).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).unwrap(),
        "application/vnd.apple.mpegurl"
    );

    let body = body_text(resp).await;
    let expected = format!(
        "#EXTM3U\n\
         #EXT-X-TARGETDURATION:4\n\
         #EXT-X-KEY:METHOD=AES-128,URI=\"http://localhost:8080/proxy/?url={base}/storage/enc.key\"\n\
         #EXTINF:4.000,\n\
         http://localhost:8080/proxy/?url={base}/hls/720p/seg-1-v1-a1.ts\n\
         #EXT-X-ENDLIST",
        base = server.uri()
    );
    assert_eq!(body, expected);
}

#[tokio::test]
async fn secondary_manifest_uses_configured_relay() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://cdn.test/a.ts"))
        .mount(&server)
        .await;

    let config = Config {
        relay_base_url: "https://relay.test/p/".to_string(),
        ..test_config()
    };
    let uri = format!(
        "/api/v1/vixcloud/secondary?url={}",
        urlencoding::encode(&format!("{}/index.m3u8", server.uri()))
    );
    let resp = get(config, &uri).await;

    assert_eq!(
        body_text(resp).await,
        "https://relay.test/p/?url=https://cdn.test/a.ts"
    );
}
