use serde::{Deserialize, Serialize};

use crate::data::models::{HskLevel, Mode};

/// Front and back of the card shown for the current word.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Flashcard {
    pub simplified: String,
    pub traditional: String,
    pub pinyin: String,
    pub meanings: Vec<String>,
    pub level: HskLevel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    pub character: String,
    pub pinyin: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

/// A recorded response. Never changed once pushed onto the quiz's answer list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub question_index: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
}

#[derive(Debug, Deserialize)]
pub struct LevelsParams {
    pub mode: Mode,
}

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub option: String,
}
