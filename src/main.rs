use anyhow::Context as _;
use axum::{
    extract::Extension,
    routing::{get, get_service, post},
    Router,
};
use std::sync::Arc;
use tera::Tera;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

mod config;
mod data;
mod features;
mod handlers;
mod utils;

use config::Config;
use data::{Vocabulary, VocabularyLoader};
use handlers::{api, flashcard, pages, quiz};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    // Word lists for every level
    let vocabulary = Arc::new(VocabularyLoader::new(&config.data_dir).load_all().await);

    let templates = Tera::new(&config.templates).context("Template parsing error")?;

    let app = app(&config, vocabulary, Arc::new(templates));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

pub fn app(config: &Config, vocabulary: Arc<Vocabulary>, templates: Arc<Tera>) -> Router {
    // Study state lives only in memory and dies with the session
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_days)))
        .with_secure(false);

    let flashcard_router = Router::new()
        .route("/flashcard", get(flashcard::show_flashcard))
        .route("/flashcard/{level}", get(flashcard::start_flashcard))
        .route("/flashcard/next", post(flashcard::next_card))
        .route("/flashcard/previous", post(flashcard::previous_card))
        .route("/flashcard/flip", post(flashcard::flip_card))
        .with_state(vocabulary.clone());

    let quiz_router = Router::new()
        .route("/quiz", get(quiz::show_quiz))
        .route("/quiz/{level}", get(quiz::start_quiz))
        .route("/quiz/answer", post(quiz::submit_answer))
        .route("/quiz/reveal", post(quiz::reveal_answer))
        .route("/quiz/next", post(quiz::next_question))
        .route("/quiz/previous", post(quiz::previous_question))
        .route("/quiz/reset", post(quiz::reset_quiz))
        .with_state(vocabulary.clone());

    let api_router = Router::new()
        .route("/vocabulary/{level}", get(api::vocabulary_api))
        .route("/flashcard", get(api::flashcard_api))
        .route("/quiz", get(api::quiz_api))
        .with_state(vocabulary);

    Router::new()
        .route("/", get(pages::home))
        .route("/levels", get(pages::levels))
        .merge(flashcard_router)
        .merge(quiz_router)
        .nest("/api", api_router)
        // Raw word lists and assets
        .nest_service("/data", get_service(ServeDir::new(&config.data_dir)))
        .nest_service("/static", get_service(ServeDir::new(&config.static_dir)))
        .layer(Extension(templates))
        .layer(session_layer)
}
