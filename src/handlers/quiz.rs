use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use serde::Serialize;
use std::sync::Arc;
use tera::Tera;
use tower_sessions::Session;

use crate::{
    data::{
        models::{Answer, AnswerForm, AppError, HskLevel, Mode, Question, Score, Word},
        Vocabulary,
    },
    features::quiz::QuizSession,
    utils::{self, render_template},
};

const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Serialize)]
pub struct OptionView {
    pub letter: String,
    pub text: String,
    pub is_correct: bool,
    pub is_user_answer: bool,
}

/// Everything the quiz screen and `/api/quiz` show.
#[derive(Serialize)]
pub struct QuizView {
    pub mode: Mode,
    pub level: HskLevel,
    pub current_index: usize,
    pub position: usize,
    pub total: usize,
    pub question: Option<Question>,
    pub options: Vec<OptionView>,
    pub current_answer: Option<Answer>,
    pub answers: Vec<Answer>,
    pub has_answered: bool,
    pub is_revealed: bool,
    pub is_complete: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub score: Score,
}

impl QuizView {
    pub fn build(state: &QuizSession, words: &[Word]) -> Self {
        let total = words.len();
        let current_answer = state.current_answer().cloned();
        let has_answered = current_answer.is_some();

        let options = state
            .options(words)
            .into_iter()
            .enumerate()
            .map(|(idx, option)| OptionView {
                letter: LETTERS.get(idx).copied().unwrap_or("?").to_string(),
                is_user_answer: current_answer
                    .as_ref()
                    .is_some_and(|a| a.user_answer == option.text),
                text: option.text,
                is_correct: option.is_correct,
            })
            .collect();

        Self {
            mode: Mode::Quiz,
            level: state.level(),
            current_index: state.current_index(),
            position: state.current_index() + 1,
            total,
            question: state.current_question(words),
            options,
            current_answer,
            answers: state.answers().to_vec(),
            has_answered,
            is_revealed: state.is_revealed(),
            is_complete: state.is_complete(total),
            can_previous: state.current_index() > 0,
            can_next: state.current_index() + 1 < total && (has_answered || state.is_revealed()),
            score: state.score(),
        }
    }
}

pub async fn start_quiz(Path(level): Path<String>, session: Session) -> Result<Redirect, AppError> {
    let level: HskLevel = level.parse()?;
    utils::save_quiz(&session, &QuizSession::new(level, rand::random())).await?;
    log::debug!("Started quiz for HSK {}", level);
    Ok(Redirect::to("/quiz"))
}

pub async fn show_quiz(
    State(vocabulary): State<Arc<Vocabulary>>,
    Extension(templates): Extension<Arc<Tera>>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(state) = utils::load_quiz(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let view = QuizView::build(&state, vocabulary.words(state.level()));
    let mut context = utils::view_context(&view)?;
    context.insert("title", &format!("HSK Level {} Quiz", state.level()));

    Ok(render_template(&templates, "quiz.html", context).into_response())
}

async fn update_quiz(
    vocabulary: &Vocabulary,
    session: &Session,
    action: impl FnOnce(&mut QuizSession, &[Word]),
) -> Result<Redirect, AppError> {
    let Some(mut state) = utils::load_quiz(session).await? else {
        return Ok(Redirect::to("/"));
    };
    let words = vocabulary.words(state.level());
    action(&mut state, words);
    utils::save_quiz(session, &state).await?;
    Ok(Redirect::to("/quiz"))
}

pub async fn submit_answer(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
    Form(form): Form<AnswerForm>,
) -> Result<Redirect, AppError> {
    update_quiz(&vocabulary, &session, |state, words| {
        if !state.submit_answer(words, &form.option) {
            log::debug!("Ignored answer for question {}", state.current_index());
        }
    })
    .await
}

pub async fn reveal_answer(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_quiz(&vocabulary, &session, |state, _| state.reveal()).await
}

pub async fn next_question(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_quiz(&vocabulary, &session, |state, words| {
        state.next(words.len());
    })
    .await
}

pub async fn previous_question(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_quiz(&vocabulary, &session, |state, _| {
        state.previous();
    })
    .await
}

pub async fn reset_quiz(
    State(vocabulary): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, AppError> {
    update_quiz(&vocabulary, &session, |state, _| state.reset(rand::random())).await
}
