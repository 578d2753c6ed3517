use serde::{de::DeserializeOwned, Serialize};
use tower_sessions::Session;

use crate::data::models::AppError;
use crate::features::{flashcard::FlashcardSession, quiz::QuizSession};

const FLASHCARD_KEY: &str = "flashcard";
const QUIZ_KEY: &str = "quiz";

async fn get_state<T: DeserializeOwned>(session: &Session, key: &str) -> Result<Option<T>, AppError> {
    match session.get::<T>(key).await {
        Ok(state) => Ok(state),
        Err(e) => {
            log::error!("Failed to read {} state from session: {}", key, e);
            Err(e.into())
        }
    }
}

async fn set_state<T: Serialize>(session: &Session, key: &str, state: &T) -> Result<(), AppError> {
    session.insert(key, state).await.map_err(|e| {
        log::error!("Failed to store {} state in session: {}", key, e);
        AppError::from(e)
    })
}

pub async fn load_flashcard(session: &Session) -> Result<Option<FlashcardSession>, AppError> {
    get_state(session, FLASHCARD_KEY).await
}

pub async fn save_flashcard(session: &Session, state: &FlashcardSession) -> Result<(), AppError> {
    set_state(session, FLASHCARD_KEY, state).await
}

pub async fn load_quiz(session: &Session) -> Result<Option<QuizSession>, AppError> {
    get_state(session, QUIZ_KEY).await
}

pub async fn save_quiz(session: &Session, state: &QuizSession) -> Result<(), AppError> {
    set_state(session, QUIZ_KEY, state).await
}
