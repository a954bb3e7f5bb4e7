use rosteraudit_core::FetchConfig;
use rosteraudit_fetch::{FetchError, HttpFetcher, PageFetcher};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_forwards_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/all"))
        .and(header("cookie", "pid=owner-session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetchConfig {
        cookie: Some("pid=owner-session".to_string()),
        ..FetchConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).expect("build fetcher");

    let page = fetcher
        .fetch(&format!("{}/teams/all", server.uri()))
        .await
        .expect("fetch roster page");

    assert!(page.is_success());
    assert_eq!(page.body, "<table></table>");
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/playerpage/career-stats/7/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetchConfig::default()).expect("build fetcher");
    let page = fetcher
        .fetch(&format!("{}/players/playerpage/career-stats/7/", server.uri()))
        .await
        .expect("404 is still a page");

    assert_eq!(page.status, 404);
    assert!(!page.is_success());
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let fetcher = HttpFetcher::new(&FetchConfig::default()).expect("build fetcher");
    let result = fetcher
        .fetch(&format!("http://127.0.0.1:{port}/teams/all"))
        .await;
    assert!(matches!(result, Err(FetchError::Request(_))));
}
