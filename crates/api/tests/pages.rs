//! Integration tests for the server-rendered pages.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, get, post_form};
use folio_core::catalog::{ContentStore, EMBEDDED_CONTENT};

async fn page(uri: &str) -> String {
    let response = get(common::build_test_app(), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

/// Render `uri` over a copy of the embedded catalog edited by `edit`,
/// loaded back from a file.
async fn page_with_content(uri: &str, edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut content: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
    edit(&mut content);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, content.to_string()).unwrap();
    let store = ContentStore::load(&path).unwrap();

    let app = common::build_app_with_store(store, common::test_config());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

fn project_mut<'a>(content: &'a mut serde_json::Value, id: &str) -> &'a mut serde_json::Value {
    content["projects"]
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .find(|p| p["id"] == id)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_renders_html_with_every_card() {
    let response = get(common::build_test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert_eq!(html.matches("class=\"project-card\"").count(), 9);
    assert!(html.contains("All Projects"));
    assert!(html.contains("Research &amp; Entrepreneurship"));
    assert!(html.contains("id=\"documents\""));
    assert!(!html.contains("class=\"modal-backdrop\""));
}

#[tokio::test]
async fn rotating_card_renders_video_with_sequence() {
    let html = page("/").await;

    assert!(html.contains("data-rotation="));
    assert!(html.contains("Spider_Bot_video.mp4"));
}

#[tokio::test]
async fn category_filter_narrows_grid() {
    let html = page("/?category=Community").await;

    assert_eq!(html.matches("class=\"project-card\"").count(), 1);
    assert!(html.contains("href=\"/projects/cyber-advocacy\""));
    assert!(!html.contains("href=\"/projects/beetlebot\""));
}

#[tokio::test]
async fn unknown_category_shows_empty_state() {
    let html = page("/?category=Astronomy").await;

    assert!(html.contains("class=\"empty-state muted\""));
    assert_eq!(html.matches("class=\"project-card\"").count(), 0);
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deep_link_opens_detail() {
    let html = page("/?project=cyber-advocacy").await;

    assert!(html.contains("class=\"modal-backdrop\""));
    assert!(html.contains("data-section=\"documents\""));
    assert!(html.contains("data-section=\"collection\""));
}

#[tokio::test]
async fn detail_without_pdfs_has_no_documents_container() {
    let html = page_with_content("/?project=smart-compost", |content| {
        let compost = project_mut(content, "smart-compost");
        compost["content"]["media"]
            .as_array_mut()
            .unwrap()
            .retain(|item| item["type"] != "pdf");
    })
    .await;

    assert!(html.contains("class=\"modal-backdrop\""));
    assert!(!html.contains("data-section=\"documents\""));
    assert!(html.contains("data-section=\"videos\""));
}

#[tokio::test]
async fn detail_with_pdfs_and_videos_renders_both_containers() {
    let html = page("/?project=smart-compost").await;

    assert!(html.contains("data-section=\"documents\""));
    assert!(html.contains("data-section=\"videos\""));
}

#[tokio::test]
async fn unknown_deep_link_renders_page_without_detail() {
    let html = page("/?project=does-not-exist").await;

    assert!(!html.contains("class=\"modal-backdrop\""));
}

#[tokio::test]
async fn story_alternates_layout() {
    let html = page("/?project=beetlebot").await;

    assert_eq!(html.matches("class=\"story-block").count(), 2);
    assert_eq!(html.matches("class=\"story-block reversed\"").count(), 1);
}

#[tokio::test]
async fn story_block_with_missing_media_is_skipped() {
    let html = page_with_content("/?project=beetlebot", |content| {
        let beetlebot = project_mut(content, "beetlebot");
        beetlebot["content"]["content_flow"][1]["media_index"] = serde_json::json!(99);
    })
    .await;

    assert_eq!(html.matches("class=\"story-block").count(), 1);
}

#[tokio::test]
async fn project_route_redirects_to_deep_link() {
    let response = get(common::build_test_app(), "/projects/beetlebot").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?project=beetlebot");
}

#[tokio::test]
async fn unknown_project_route_redirects_home() {
    let response = get(common::build_test_app(), "/projects/nope").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_contact_form_is_acknowledged() {
    let response = post_form(
        common::build_test_app(),
        "/contact",
        "name=Ada&email=ada%40example.com&subject=Robots&message=Hello%20there",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Message Sent!"));
    assert!(html.contains("class=\"notice success\""));
    assert!(html.contains("id=\"name\" name=\"name\" value=\"\""));
}

#[tokio::test]
async fn invalid_contact_form_keeps_values() {
    let response = post_form(
        common::build_test_app(),
        "/contact",
        "name=Ada&email=not-an-email&subject=Robots&message=Hello",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("class=\"notice error\""));
    assert!(html.contains("A valid email address is required"));
    assert!(html.contains("value=\"not-an-email\""));
}
