pub mod models;

use models::{Note, NoteDto, NoteSummaryDto};
use restbase::http::middleware::from_fn;
use restbase::prelude::*;
use restbase::restbase_crud::CrudController;
use restbase::restbase_data::{InMemoryRepository, Sort};

pub type NoteRepository = InMemoryRepository<Note>;
pub type NoteController = CrudController<Note, NoteRepository, NoteSummaryDto, NoteDto>;

/// Assemble the demo router: notes CRUD nested under `/notes`.
pub fn app(repo: NoteRepository) -> Router {
    let notes: NoteController = CrudController::builder(repo)
        .resource("note")
        .sort(Sort::desc("createdAt"))
        .build();

    Router::new()
        .nest("/notes", notes.into_router())
        .layer(from_fn(attach_identity))
        .layer(default_trace())
}

/// Seed a few notes so a fresh instance has something to serve.
pub async fn seed(repo: &NoteRepository) {
    for (title, body) in [
        ("groceries", "milk, eggs, coffee"),
        ("ideas", "a CRUD layer that writes itself"),
        ("reading", "the axum book, again"),
    ] {
        repo.save(&Note::new(title, body)).await.expect("seed note");
    }
}
