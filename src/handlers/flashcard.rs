use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use serde::Serialize;
use std::sync::Arc;
use tera::Tera;
use tower_sessions::Session;

use crate::{
    data::{
        models::{AppError, Flashcard, HskLevel, Mode, Word},
        Vocabulary,
    },
    features::flashcard::FlashcardSession,
    utils::{self, render_template},
};

/// Everything the flashcard screen and `/api/flashcard` show.
#[derive(Serialize)]
pub struct FlashcardView {
    pub mode: Mode,
    pub level: HskLevel,
    pub current_index: usize,
    pub position: usize,
    pub total: usize,
    pub is_flipped: bool,
    pub card: Option<Flashcard>,
    pub can_previous: bool,
    pub can_next: bool,
}

impl FlashcardView {
    pub fn build(state: &FlashcardSession, words: &[Word]) -> Self {
        let total = words.len();
        Self {
            mode: Mode::Flashcard,
            level: state.level(),
            current_index: state.current_index(),
            position: state.current_index() + 1,
            total,
            is_flipped: state.is_flipped(),
            card: state.current_card(words),
            can_previous: state.current_index() > 0,
            can_next: state.current_index() + 1 < total,
        }
    }
}

pub async fn start_flashcard(
    Path(level): Path<String>,
    session: Session,
) -> Result<Redirect, AppError> {
    let level: HskLevel = level.parse()?;
    utils::save_flashcard(&session, &FlashcardSession::new(level)).await?;
    log::debug!("Started flashcards for HSK {}", level);
    Ok(Redirect::to("/flashcard"))
}

pub async fn show_flashcard(
    State(vocabulary): State<Arc<Vocabulary>>,
    Extension(templates): Extension<Arc<Tera>>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(state) = utils::load_flashcard(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let view = FlashcardView::build(&state, vocabulary.words(state.level()));
    let mut context = utils::view_context(&view)?;
    context.insert("title", &format!("HSK Level {}", state.level()));

    Ok(render_template(&templates, "flashcard.html", context).into_response())
}

async fn update_flashcard(
    vocabulary: &Vocabulary,
    session: &Session,
    action: impl FnOnce(&mut FlashcardSession, &[Word]),
) -> Result<Redirect, AppError> {
    let Some(mut state) = utils::load_flashcard(session).await? else {
        return Ok(Redirect::to("/"));
    };
    let words = vocabulary.words(state.level());
    action(&mut state, words);
    utils::save_flashcard(session, &state).await?;
    Ok(Redirect::to("/flashcard"))
}

pub async fn next_card(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_flashcard(&vocabulary, &session, |state, words| {
        state.next(words.len());
    })
    .await
}

pub async fn previous_card(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_flashcard(&vocabulary, &session, |state, _| {
        state.previous();
    })
    .await
}

pub async fn flip_card(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_flashcard(&vocabulary, &session, |state, _| state.flip()).await
}
