//! Page routing: landing page, not-found fallback and the document shell.

use axum::http::StatusCode;
use axum_test::TestServer;
use thebon_ui::{SITE_DESCRIPTION, SITE_NAME};

fn server() -> TestServer {
    TestServer::new(thebon_web::app().into_make_service()).unwrap()
}

#[tokio::test]
async fn home_renders_with_docs_link() {
    let response = server().get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/html; charset=utf-8");

    let html = response.text();
    assert!(html.contains("프로젝트가 성공적으로 초기화되었습니다."));
    assert!(html.contains(r#"href="/docs""#));
}

#[tokio::test]
async fn unknown_path_renders_not_found() {
    let response = server().get("/no/such/page").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("페이지를 찾을 수 없습니다."));
    assert!(html.contains(r#"href="/""#));
}

#[tokio::test]
async fn wrong_method_on_known_path_is_405() {
    let server = server();

    for path in ["/", "/health"] {
        let response = server.post(path).expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.header("allow"), "GET,HEAD");
        assert!(!response.text().contains("페이지를 찾을 수 없습니다."));
    }
}

#[tokio::test]
async fn docs_target_is_not_served_here() {
    let response = server().get("/docs").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_page_uses_the_root_shell() {
    let server = server();
    let home = server.get("/").await.text();
    let missing = server.get("/missing").expect_failure().await.text();

    for html in [home, missing] {
        assert!(html.contains(r#"<html lang="ko">"#));
        assert!(html.contains(&format!("<title>{}</title>", SITE_NAME)));
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            SITE_DESCRIPTION
        )));
        assert!(html.contains("font-heading-variable font-body-variable antialiased"));
    }
}
