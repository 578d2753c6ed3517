use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tower_sessions::Session;

use crate::{
    data::{
        models::{AppError, HskLevel, Word},
        Vocabulary,
    },
    handlers::{flashcard::FlashcardView, quiz::QuizView},
    utils,
};

pub async fn vocabulary_api(
    Path(level): Path<String>,
    State(vocabulary): State<Arc<Vocabulary>>,
) -> Result<Json<Vec<Word>>, AppError> {
    let level: HskLevel = level.parse()?;
    Ok(Json(vocabulary.words(level).to_vec()))
}

pub async fn flashcard_api(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Json<FlashcardView>, AppError> {
    let state = utils::load_flashcard(&session)
        .await?
        .ok_or(AppError::NoActiveSession("flashcard"))?;
    Ok(Json(FlashcardView::build(&state, vocabulary.words(state.level()))))
}

pub async fn quiz_api(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Json<QuizView>, AppError> {
    let state = utils::load_quiz(&session)
        .await?
        .ok_or(AppError::NoActiveSession("quiz"))?;
    Ok(Json(QuizView::build(&state, vocabulary.words(state.level()))))
}
