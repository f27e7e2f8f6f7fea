use demo_app::models::Note;
use demo_app::{app, NoteRepository};
use restbase::restbase_data::Repository;
use restbase_test::TestApp;
use serde_json::Value;

async fn seeded_app() -> (TestApp, Note) {
    let repo = NoteRepository::new();
    let note = repo
        .save(&Note::new("first", "hello world"))
        .await
        .unwrap();
    (TestApp::new(app(repo)), note)
}

#[tokio::test]
async fn note_lifecycle_end_to_end() {
    let (app, note) = seeded_app().await;

    app.get(&format!("/notes/{}", note.id))
        .header("x-login", "alice")
        .send()
        .await
        .assert_ok()
        .assert_json_path("data.title", "first")
        .assert_json_path("data.body", "hello world");

    app.delete(&format!("/notes/{}/delete", note.id))
        .send()
        .await
        .assert_ok()
        .assert_json_path("message", "note deleted");

    app.get(&format!("/notes/{}", note.id))
        .send()
        .await
        .assert_unauthorized();

    app.put(&format!("/notes/{}/restore", note.id))
        .send()
        .await
        .assert_ok();

    app.get(&format!("/notes/{}", note.id)).send().await.assert_ok();
}

#[tokio::test]
async fn note_list_uses_the_summary_dto() {
    let (app, _note) = seeded_app().await;

    let body: Value = app.get("/notes").send().await.assert_ok().json();
    assert_eq!(body["data"]["totalElements"], 1);

    let item = &body["data"]["items"][0];
    assert_eq!(item["title"], "first");
    // the summary representation leaves the body behind
    assert!(item.get("body").is_none());
    assert!(item["createdAt"].is_string());
}

#[tokio::test]
async fn unknown_note_is_404() {
    let (app, _note) = seeded_app().await;

    app.get(&format!("/notes/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .assert_not_found();
}
