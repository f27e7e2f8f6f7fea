use demo_app::{app, seed, NoteRepository};
use restbase::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let repo = NoteRepository::new();
    seed(&repo).await;

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!(%addr, "demo-app listening");
    restbase::http::serve(listener, app(repo)).await.unwrap();
}
