//! End-to-end joke session flows driven through `App` with mock transport
//! and clipboards.

mod common;

use common::{completion_ok, status_response, TestHarness};
use jokecard::adapters::MockResponse;
use jokecard::app::{Alert, Focus};
use jokecard::clipboard::MSG_COPIED;
use jokecard::error::{MSG_EMPTY_KEYWORDS, MSG_EXPORT_FAILED, MSG_GENERATE_FAILED, MSG_NO_SELECTION};
use jokecard::session::RequestState;
use jokecard::share_card::raster::CELL_H;
use jokecard::share_card::{
    rasterize_buffer, system_fonts, CaptureOptions, CardExporter, TEXT_FIRST_ROW,
};
use jokecard::traits::{ClipboardError, HttpError};

const THREE_JOKES: &str = "1. 第一个笑话\n2. 第二个笑话\n3. 第三个笑话";

#[tokio::test]
async fn test_generate_renders_candidates() {
    let mut harness = TestHarness::new();
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.app.style_index = 2;

    harness.generate("猫, 周一 ,").await;

    let texts: Vec<&str> = harness
        .app
        .session
        .candidates()
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(texts, vec!["第一个笑话", "第二个笑话", "第三个笑话"]);
    assert_eq!(harness.app.session.candidates()[2].index, 3);
    assert!(harness.app.session.results_visible());
    assert!(!harness.app.session.share_visible());
    assert_eq!(harness.app.focus, Focus::Candidates);
    assert!(harness.app.alert.is_none());

    let requests = harness.http.get_requests();
    assert_eq!(requests.len(), 1);
    let prompt = requests[0].body_json()["messages"][1]["content"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(prompt.contains("猫、周一"));
    assert!(prompt.contains("反转"));
}

#[tokio::test]
async fn test_empty_keywords_never_call_api() {
    let mut harness = TestHarness::new();
    harness.app.keywords.set_content(" ,  ，".to_string());

    assert_eq!(harness.app.generate(), None);
    assert_eq!(harness.app.alert, Some(Alert::error(MSG_EMPTY_KEYWORDS)));
    assert_eq!(harness.http.request_count(), 0);
    assert_eq!(harness.app.session.request_state(), RequestState::Idle);
}

#[tokio::test]
async fn test_server_error_shows_one_alert_and_resets_loading() {
    let mut harness = TestHarness::new();
    harness.http.push_response(status_response(500, "boom"));

    harness.generate("猫").await;

    assert_eq!(harness.app.alert, Some(Alert::error(MSG_GENERATE_FAILED)));
    assert!(!harness.app.is_loading());
    assert!(harness.app.session.candidates().is_empty());
    assert!(!harness.app.session.results_visible());
}

#[tokio::test]
async fn test_transport_and_shape_errors_share_the_alert() {
    for response in [
        MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        MockResponse::Error(HttpError::Timeout("slow".into())),
        completion_ok("   "),
        status_response(200, "{\"choices\": []}"),
        status_response(200, "not json"),
    ] {
        let mut harness = TestHarness::new();
        harness.http.push_response(response);
        harness.generate("猫").await;

        assert_eq!(harness.app.alert, Some(Alert::error(MSG_GENERATE_FAILED)));
        assert!(!harness.app.is_loading());
    }
}

#[tokio::test]
async fn test_second_generate_while_in_flight_is_rejected() {
    let mut harness = TestHarness::new();
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.app.keywords.set_content("猫".to_string());

    assert!(harness.app.generate().is_some());
    assert!(harness.app.is_loading());
    assert_eq!(harness.app.generate(), None);
    assert!(harness.app.alert.is_none());

    harness.next_message().await;
    assert_eq!(harness.http.request_count(), 1);
    assert_eq!(harness.app.session.candidates().len(), 3);
}

#[tokio::test]
async fn test_new_generation_replaces_list_and_selection() {
    let mut harness = TestHarness::new();
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.http.push_response(completion_ok("1. 新笑话"));

    harness.generate("猫").await;
    harness.app.select_by_index(1);
    assert!(harness.app.session.selected_id().is_some());

    harness.generate("狗").await;
    assert_eq!(harness.app.session.candidates().len(), 1);
    assert_eq!(harness.app.session.candidates()[0].text, "新笑话");
    assert!(harness.app.session.selected_id().is_none());
    assert!(!harness.app.session.share_visible());
}

#[tokio::test]
async fn test_select_updates_share_card() {
    let mut harness = TestHarness::new();
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.generate("猫").await;

    harness.app.select_by_index(2);

    let card = harness.app.session.share_card();
    assert_eq!(card.text, "第二个笑话");
    assert_eq!(card.timestamp.len(), "2024/01/01 00:00".len());
    assert!(harness.app.session.share_visible());
    assert!(harness.app.pending_export);
}

#[tokio::test]
async fn test_duplicate_texts_highlight_only_the_selected_one() {
    let mut harness = TestHarness::new();
    harness
        .http
        .push_response(completion_ok("1. 同一个笑话\n2. 同一个笑话\n3. 不同的"));
    harness.generate("猫").await;

    harness.app.select_by_index(2);

    let highlighted: Vec<usize> = harness
        .app
        .session
        .candidates()
        .iter()
        .filter(|c| harness.app.session.is_selected(c.id))
        .map(|c| c.index)
        .collect();
    assert_eq!(highlighted, vec![2]);
}

#[tokio::test]
async fn test_export_and_copy_require_selection() {
    let mut harness = TestHarness::new();
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.generate("猫").await;

    harness.app.export_image();
    assert_eq!(harness.app.alert, Some(Alert::error(MSG_NO_SELECTION)));
    harness.app.dismiss_alert();

    harness.app.copy_text();
    assert_eq!(harness.app.alert, Some(Alert::error(MSG_NO_SELECTION)));
    assert!(harness.clipboard.writes().is_empty());
    assert!(harness.fallback.writes().is_empty());
}

#[tokio::test]
async fn test_copy_falls_back_when_clipboard_unavailable() {
    let mut harness = TestHarness::with_clipboards(
        jokecard::adapters::MockClipboard::failing(ClipboardError::Unavailable("headless".into())),
        jokecard::adapters::MockClipboard::new(),
    );
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.generate("猫").await;
    harness.app.select_by_index(3);

    harness.app.copy_text();

    assert_eq!(harness.fallback.last().as_deref(), Some("第三个笑话"));
    assert_eq!(harness.app.alert, Some(Alert::info(MSG_COPIED)));
}

#[tokio::test]
async fn test_export_failure_alerts_without_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mut harness = TestHarness::new()
        .export_to(tmp.path(), std::path::Path::new("/no/such/font.ttf"));
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.generate("猫").await;
    harness.app.select_by_index(1);

    harness.app.export_image();

    assert_eq!(harness.app.alert, Some(Alert::error(MSG_EXPORT_FAILED)));
    assert!(harness.app.last_export.is_none());
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_auto_export_after_card_frame() {
    // Needs a CJK font; skipped where none is installed.
    let Some(font) = system_fonts().next() else {
        return;
    };
    let tmp = tempfile::tempdir().unwrap();
    let mut harness = TestHarness::new().export_to(tmp.path(), &font);
    harness.http.push_response(completion_ok(THREE_JOKES));
    harness.generate("猫").await;
    harness.app.select_by_index(1);

    harness.app.share_card_drawn = true;
    harness.app.on_frame_rendered();

    let path = harness.app.last_export.clone().expect("card exported");
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("冷笑话_"), "{}", name);
    assert!(name.ends_with(".png"));
    assert!(path.exists());
    assert!(harness.app.alert.is_none());
    assert!(!harness.app.pending_export);

    // The joke text row carries glyphs, not just the card background.
    let exported = image::open(&path).unwrap().to_rgba8();
    let blank = rasterize_buffer::<ab_glyph::FontVec>(
        &CardExporter::render_buffer(harness.app.session.share_card()),
        CaptureOptions::default(),
        None,
    );
    let row_h = CELL_H * CaptureOptions::default().scale;
    let top = u32::from(TEXT_FIRST_ROW) * row_h;
    let inked = (top..top + row_h)
        .flat_map(|y| (0..exported.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| exported.get_pixel(x, y) != blank.get_pixel(x, y))
        .count();
    assert!(inked > 0);
}
