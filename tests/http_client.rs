use pretty_assertions::assert_eq;
use reqwest::header::HeaderMap;
use spscan::{
    AppError, ClientOptions, CookieHeader, HttpClient, LibraryScanner, LibrarySource,
    ReqwestHttpClient, ResultsBody, SiteDepth, TimeDisplay,
};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_ID: &str = "5F0C2E1A-7B3D-4C8E-9A21-3D4E5F607182";

fn client(options: ClientOptions) -> ReqwestHttpClient {
    ReqwestHttpClient::new(&options).expect("client builds")
}

async fn mount_library(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/sites/A/B/_api/web/GetList(@v)"))
        .and(query_param("@v", "'/sites/A/B/Docs'"))
        .and(header("Accept", "application/json;odata=verbose"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/api_responses/list_metadata.json"),
            "application/json;odata=verbose;charset=utf-8",
        ))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/sites/A/B/_api/web/lists(guid'{}')/items", LIST_ID)))
        .and(query_param("$top", "5000"))
        .and(query_param(
            "$select",
            "Id,Title,FileLeafRef,FileRef,Modified,Editor/Title",
        ))
        .and(query_param("$expand", "Editor"))
        .and(header("Accept", "application/json;odata=verbose"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/api_responses/list_items.json"),
            "application/json;odata=verbose;charset=utf-8",
        ))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_json_decodes_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"d":{"Id":"X"}}"#, "application/json"))
        .mount(&server)
        .await;

    let json = client(ClientOptions::default())
        .get_json(&format!("{}/doc", server.uri()), &HeaderMap::new())
        .await
        .expect("json");
    assert_eq!(json["d"]["Id"], "X");
}

#[tokio::test]
async fn get_json_reports_status_and_body_excerpt() {
    let server = MockServer::start().await;
    let body = "<html>".to_string() + &"Access denied. ".repeat(40);
    Mock::given(method("GET"))
        .and(path("/denied"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(body.clone(), "text/html"))
        .mount(&server)
        .await;

    let url = format!("{}/denied", server.uri());
    let err = client(ClientOptions::default())
        .get_json(&url, &HeaderMap::new())
        .await
        .unwrap_err();

    match err {
        AppError::Http {
            status,
            url: failed_url,
            body_excerpt,
        } => {
            assert_eq!(status, 403);
            assert_eq!(failed_url, url);
            assert_eq!(body_excerpt, body.chars().take(200).collect::<String>());
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_json_rejects_non_json_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>Sign in</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client(ClientOptions::default())
        .get_json(&format!("{}/login", server.uri()), &HeaderMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[tokio::test]
async fn ambient_cookie_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("Cookie", "FedAuth=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClientOptions {
        cookie: Some(CookieHeader::new("FedAuth=abc").unwrap()),
        timeout: Some(Duration::from_secs(10)),
    };
    client(options)
        .get_json(&format!("{}/private", server.uri()), &HeaderMap::new())
        .await
        .expect("cookie matched");
}

#[tokio::test]
async fn scanner_reads_library_from_server() {
    let server = MockServer::start().await;
    mount_library(&server).await;

    let scanner = LibraryScanner::new(
        client(ClientOptions::default()),
        SiteDepth::default(),
        TimeDisplay::Utc,
    );
    let library_url = format!("{}/sites/A/B/Docs/Forms/AllItems.aspx", server.uri());

    let result = scanner.fetch(&library_url).await.expect("scan succeeds");
    assert_eq!(result.metadata.title, "Shared Docs");
    assert_eq!(result.item_count(), 3);
    assert_eq!(result.items[0].editor_name, "Alice");
}

#[tokio::test]
async fn scanner_surfaces_missing_library() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/A/B/_api/web/GetList(@v)"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"error":{"code":"-2147024894, System.IO.FileNotFoundException","message":{"lang":"en-US","value":"File Not Found."}}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let scanner = LibraryScanner::new(
        client(ClientOptions::default()),
        SiteDepth::default(),
        TimeDisplay::Utc,
    );
    let model = scanner
        .scan(&format!("{}/sites/A/B/Missing", server.uri()))
        .await;

    match &model.body {
        ResultsBody::Failure(message) => {
            assert!(message.starts_with("HTTP 404 from "));
            assert!(message.contains("File Not Found."));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
