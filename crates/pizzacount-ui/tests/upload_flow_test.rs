//! End-to-end upload flow: controller -> HTTP client -> mock processing server.

use std::sync::Arc;

use mockito::Matcher;
use pizzacount_api_client::ApiClient;
use pizzacount_core::{ClientConfig, FileSelection, ResultView, SelectedFile};
use pizzacount_ui::{DisplayTargets, MemoryResultArea, MemoryText, SubmitStatus, UploadController};

struct Page {
    label: Arc<MemoryText>,
    result: Arc<MemoryResultArea>,
    stats: Arc<MemoryText>,
}

fn page() -> Page {
    Page {
        label: Arc::new(MemoryText::new()),
        result: Arc::new(MemoryResultArea::new()),
        stats: Arc::new(MemoryText::new()),
    }
}

fn controller_for(server_url: String, page: &Page) -> UploadController {
    let client = ApiClient::new(ClientConfig::default().with_base_url(server_url)).unwrap();
    UploadController::from_client(
        client,
        DisplayTargets {
            label: page.label.clone(),
            result: page.result.clone(),
            stats: page.stats.clone(),
        },
    )
}

#[tokio::test]
async fn test_image_upload_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/process")
        .match_body(Matcher::Regex(
            r#"name="image"; filename="margherita.jpg""#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 7, "type": "image"}"#)
        .expect(1)
        .create_async()
        .await;

    let page = page();
    let controller = controller_for(server.url(), &page);
    let selection = FileSelection::single(SelectedFile::new("margherita.jpg", b"jpeg".to_vec()));

    controller.update_label(&selection);
    let status = controller.submit_and_render(&selection).await;

    mock.assert_async().await;
    assert!(matches!(status, SubmitStatus::Rendered(ResultView::Image { .. })));
    assert_eq!(page.label.text(), "margherita.jpg");
    assert_eq!(page.stats.text(), "Count: 7");
    assert!(page
        .result
        .html()
        .starts_with(r#"<img src="/static/result.jpg?"#));
}

#[tokio::test]
async fn test_unsupported_file_shows_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/process")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Unsupported file type"}"#)
        .create_async()
        .await;

    let page = page();
    let controller = controller_for(server.url(), &page);
    let selection = FileSelection::single(SelectedFile::new("menu.txt", b"text".to_vec()));

    let status = controller.submit_and_render(&selection).await;

    assert!(matches!(status, SubmitStatus::Failed(_)));
    assert_eq!(
        page.result.html(),
        r#"<span style="color:#d35400;">File processing failed</span>"#
    );
}

#[tokio::test]
async fn test_empty_selection_never_hits_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/process")
        .expect(0)
        .create_async()
        .await;

    let page = page();
    let controller = controller_for(server.url(), &page);

    let status = controller.submit_and_render(&FileSelection::empty()).await;

    assert_eq!(status, SubmitStatus::NoFile);
    mock.assert_async().await;
    assert_eq!(page.result.current(), ResultView::Empty);
}
