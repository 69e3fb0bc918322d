use std::sync::Arc;

use diagnostic_core::model::{COMPLETED_SENTINEL, DIAGNOSTIC_TITLE, KEY_COMPLETED, KEY_RESULT, KEY_TITLE};
use services::GREETING_FALLBACK;
use storage::repository::{InMemorySessionStore, SessionStateRepository};

use super::test_harness::{setup_harness, setup_modal_harness};

#[tokio::test(flavor = "current_thread")]
async fn fresh_session_renders_the_intro() {
    let store = Arc::new(InMemorySessionStore::new());
    let mut harness = setup_harness(store, vec![]);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Manager’s Bottleneck Diagnostic"), "missing title in {html}");
    assert!(html.contains("Begin Diagnostic"), "missing begin button in {html}");
    assert!(!html.contains("Diagnostic Complete"), "result leaked into intro: {html}");
    assert!(
        harness.store.get(KEY_COMPLETED).await.unwrap().is_none(),
        "record persisted before any answers"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn stored_session_resumes_on_the_result_screen() {
    let store = Arc::new(InMemorySessionStore::new());
    store.put(KEY_COMPLETED, COMPLETED_SENTINEL).await.unwrap();
    store.put(KEY_TITLE, DIAGNOSTIC_TITLE).await.unwrap();
    store
        .put(KEY_RESULT, "Role & Ownership Bottleneck")
        .await
        .unwrap();

    let mut harness = setup_harness(store, vec![]);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Diagnostic Complete"), "missing result banner in {html}");
    assert!(
        html.contains("Role &amp; Ownership Bottleneck") || html.contains("Role & Ownership Bottleneck"),
        "missing result label in {html}"
    );
    assert!(html.contains("Book a Strategy Call"), "missing booking CTA in {html}");
    assert!(!html.contains("Begin Diagnostic"), "intro leaked into resumed run: {html}");
    assert_eq!(
        harness.store.get(KEY_RESULT).await.unwrap().as_deref(),
        Some("Role & Ownership Bottleneck"),
        "resume must not disturb the stored record"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_stored_session_starts_fresh() {
    let store = Arc::new(InMemorySessionStore::new());
    store.put(KEY_COMPLETED, COMPLETED_SENTINEL).await.unwrap();
    store.put(KEY_RESULT, "Nonexistent").await.unwrap();

    let mut harness = setup_harness(store, vec![]);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Begin Diagnostic"), "missing intro in {html}");
    assert!(!html.contains("Diagnostic Complete"), "invalid record resumed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reopened_modal_resumes_the_conversation() {
    // One scripted reply: the greeting. A second greeting call would exhaust
    // the script and surface the greeting fallback instead.
    let mut harness = setup_modal_harness(vec![Ok("Your process result, explained.")]);

    harness.rebuild();
    for _ in 0..6 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("Your process result, explained."),
        "transcript lost across close/reopen: {html}"
    );
    assert!(
        !html.contains(GREETING_FALLBACK),
        "conversation was re-seeded on reopen: {html}"
    );
}
