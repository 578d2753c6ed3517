pub mod error_models;
pub mod study_models;
pub mod word_models;

pub use error_models::{AppError, LoadError};
pub use study_models::{
    Answer, AnswerForm, Flashcard, LevelsParams, Question, QuizOption, Score,
};
pub use word_models::{HskLevel, Mode, Word};
