//! End-to-end tests
//!
//! Exercise every endpoint against a real directory tree.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use super::fixtures::{get, get_json, TestLibrary};
use crate::content::{FileEntry, TreeListing};
use crate::http::handlers::{FileView, StreamView};

fn entry(name: &str, path: &str) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        path: path.to_string(),
    }
}

#[tokio::test]
async fn test_home_lists_library() {
    let lib = TestLibrary::new();
    let listing: TreeListing = get_json(lib.router(), "/home", StatusCode::OK).await;

    assert_eq!(listing.files, vec![entry("intro.mp4", "stream/intro.mp4")]);
    assert_eq!(
        listing.directories,
        vec![
            entry("show", "stream/show"),
            entry("show/extras", "stream/show/extras"),
        ]
    );
}

#[tokio::test]
async fn test_home_is_repeatable() {
    let lib = TestLibrary::new();
    let first: serde_json::Value = get_json(lib.router(), "/home", StatusCode::OK).await;
    let second: serde_json::Value = get_json(lib.router(), "/home", StatusCode::OK).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_stream_directory() {
    let lib = TestLibrary::new();
    let view: StreamView = get_json(lib.router(), "/stream/show", StatusCode::OK).await;

    let StreamView::Directory(listing) = view else {
        panic!("expected a directory view");
    };
    assert_eq!(
        listing.files,
        vec![
            entry("ep1.mp4", "stream/show/ep1.mp4"),
            entry("ep2.mp4", "stream/show/ep2.mp4"),
            entry("ep10.mp4", "stream/show/ep10.mp4"),
        ]
    );
}

#[tokio::test]
async fn test_stream_file_navigation_and_subtitles() {
    let lib = TestLibrary::new();
    let view: StreamView = get_json(lib.router(), "/stream/show/ep2.mp4", StatusCode::OK).await;

    assert_eq!(
        view,
        StreamView::File(FileView {
            media_title: "ep2.mp4".to_string(),
            media: "show/ep2.mp4".to_string(),
            previous: Some("ep1.mp4".to_string()),
            next: Some("ep10.mp4".to_string()),
            track: Some("show/ep2.vtt".to_string()),
        })
    );
    assert!(lib.root().join("show/ep2.vtt").exists());

    let response = get(lib.router(), "/track?file=show/ep2.vtt").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "WEBVTT\n\n00:00:01.000-->00:00:02.000\nHello\n\n00:00:02.500-->00:00:04.000\nWorld\n\n"
    );
}

#[tokio::test]
async fn test_stream_file_without_subtitles() {
    let lib = TestLibrary::new();
    let view: StreamView = get_json(lib.router(), "/stream/show/ep1.mp4", StatusCode::OK).await;

    let StreamView::File(file) = view else {
        panic!("expected a file view");
    };
    assert_eq!(file.previous, None);
    assert_eq!(file.next.as_deref(), Some("ep2.mp4"));
    assert_eq!(file.track, None);
}

#[tokio::test]
async fn test_stream_unaccepted_file_is_not_found() {
    let lib = TestLibrary::new();
    let body: serde_json::Value =
        get_json(lib.router(), "/stream/notes.txt", StatusCode::NOT_FOUND).await;
    assert!(body["detail"].as_str().unwrap().contains("notes.txt"));
}

#[tokio::test]
async fn test_stream_missing_path() {
    let lib = TestLibrary::new();
    let response = get(lib.router(), "/stream/nothing/here.mp4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stream_rejects_parent_traversal() {
    let lib = TestLibrary::new();
    let response = get(lib.router(), "/stream/show/..%2F..%2Fetc").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_media_serves_bytes_with_ranges() {
    let lib = TestLibrary::new();
    lib.write("show/ep1.mp4", "0123456789");

    let response = get(lib.router(), "/media?file=show/ep1.mp4").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"0123456789");

    let request = Request::builder()
        .uri("/media?file=show/ep1.mp4")
        .header(header::RANGE, "bytes=2-4")
        .body(Body::empty())
        .unwrap();
    let response = lib.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"234");
}

#[tokio::test]
async fn test_media_missing_file() {
    let lib = TestLibrary::new();
    let response = get(lib.router(), "/media?file=show/ep99.mp4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_track_missing_file() {
    let lib = TestLibrary::new();
    let response = get(lib.router(), "/track?file=show/none.vtt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
