use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::data::models::{Answer, HskLevel, Question, QuizOption, Score, Word};
use crate::features::quiz::{generate_options, score};

/// Progress through a multiple-choice quiz over one level's word list.
///
/// Options are not stored: they are regenerated from `seed` and the question
/// index, so a question shows the same choices every time it is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizSession {
    level: HskLevel,
    current_index: usize,
    answers: Vec<Answer>,
    is_revealed: bool,
    seed: u64,
}

impl QuizSession {
    pub fn new(level: HskLevel, seed: u64) -> Self {
        Self {
            level,
            current_index: 0,
            answers: Vec::new(),
            is_revealed: false,
            seed,
        }
    }

    pub fn level(&self) -> HskLevel {
        self.level
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn current_question(&self, words: &[Word]) -> Option<Question> {
        let word = words.get(self.current_index)?;
        Some(Question {
            character: word.simplified.clone(),
            pinyin: word.pinyin().to_string(),
            correct_answer: word.primary_meaning().to_string(),
        })
    }

    pub fn options(&self, words: &[Word]) -> Vec<QuizOption> {
        match words.get(self.current_index) {
            Some(word) => {
                let mut rng = ChaCha8Rng::seed_from_u64(
                    self.seed.wrapping_add(self.current_index as u64),
                );
                generate_options(word, words, &mut rng)
            }
            None => Vec::new(),
        }
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|a| a.question_index == self.current_index)
    }

    pub fn has_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Records the choice for the current question. Returns false when the
    /// question was already answered or revealed, or there is no question.
    pub fn submit_answer(&mut self, words: &[Word], selected: &str) -> bool {
        if self.has_answered() || self.is_revealed {
            return false;
        }
        let Some(question) = self.current_question(words) else {
            return false;
        };

        self.answers.push(Answer {
            question_index: self.current_index,
            is_correct: selected == question.correct_answer,
            question: question.character,
            user_answer: selected.to_string(),
            correct_answer: question.correct_answer,
        });
        true
    }

    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Moves on once the current question is answered or revealed.
    pub fn next(&mut self, total: usize) -> bool {
        let settled = self.has_answered() || self.is_revealed;
        if settled && self.current_index + 1 < total {
            self.current_index += 1;
            self.is_revealed = false;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.is_revealed = false;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, seed: u64) {
        self.current_index = 0;
        self.answers.clear();
        self.is_revealed = false;
        self.seed = seed;
    }

    pub fn score(&self) -> Score {
        score(&self.answers)
    }

    pub fn is_complete(&self, total: usize) -> bool {
        total > 0 && self.current_index + 1 == total && self.has_answered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(simplified: &str, meaning: &str) -> Word {
        serde_json::from_value(serde_json::json!({
            "s": simplified,
            "f": [{"t": simplified, "i": {"y": "pin"}, "m": [meaning], "c": []}]
        }))
        .unwrap()
    }

    fn words() -> Vec<Word> {
        vec![
            word("爱", "to love"),
            word("八", "eight"),
            word("爸爸", "dad"),
            word("杯子", "cup"),
            word("北京", "Beijing"),
        ]
    }

    fn quiz() -> QuizSession {
        QuizSession::new(HskLevel::try_from(1).unwrap(), 99)
    }

    #[test]
    fn current_question_follows_index() {
        let words = words();
        let q = quiz().current_question(&words).unwrap();
        assert_eq!(q.character, "爱");
        assert_eq!(q.pinyin, "pin");
        assert_eq!(q.correct_answer, "to love");
        assert!(quiz().current_question(&[]).is_none());
        assert!(quiz().options(&[]).is_empty());
    }

    #[test]
    fn options_are_stable_per_question() {
        let words = words();
        let mut q = quiz();
        let first = q.options(&words);
        assert_eq!(first, q.options(&words));
        assert_eq!(first.iter().filter(|o| o.is_correct).count(), 1);

        q.reveal();
        q.next(words.len());
        q.previous();
        assert_eq!(first, q.options(&words));
    }

    #[test]
    fn submit_records_once_per_question() {
        let words = words();
        let mut q = quiz();

        assert!(q.submit_answer(&words, "eight"));
        assert!(!q.submit_answer(&words, "to love"));

        let answer = q.current_answer().unwrap();
        assert_eq!(answer.user_answer, "eight");
        assert_eq!(answer.correct_answer, "to love");
        assert!(!answer.is_correct);
        assert_eq!(q.answers().len(), 1);
    }

    #[test]
    fn revisiting_an_answered_question_does_not_add_answers() {
        let words = words();
        let mut q = quiz();

        q.submit_answer(&words, "to love");
        assert!(q.next(words.len()));
        q.submit_answer(&words, "eight");
        assert!(q.previous());
        assert!(q.has_answered());
        assert!(!q.submit_answer(&words, "dad"));
        assert_eq!(q.current_answer().unwrap().user_answer, "to love");
        assert_eq!(q.answers().len(), 2);
    }

    #[test]
    fn answered_count_never_exceeds_total() {
        let words = words();
        let mut q = quiz();
        for _ in 0..3 {
            for _ in 0..words.len() {
                q.submit_answer(&words, "cup");
                q.next(words.len());
            }
            while q.previous() {}
        }
        assert_eq!(q.answers().len(), words.len());
        assert!(q.score().total <= words.len());
        assert!(q.score().percentage <= 100);
    }

    #[test]
    fn next_requires_answer_or_reveal() {
        let words = words();
        let mut q = quiz();

        assert!(!q.next(words.len()));
        q.reveal();
        assert!(!q.submit_answer(&words, "to love"));
        assert!(q.next(words.len()));
        assert!(!q.is_revealed());
        assert_eq!(q.current_index(), 1);
    }

    #[test]
    fn completes_on_last_answered_question() {
        let words = words();
        let mut q = quiz();
        for w in &words {
            assert!(!q.is_complete(words.len()));
            q.submit_answer(&words, w.primary_meaning());
            q.next(words.len());
        }
        assert!(q.is_complete(words.len()));
        assert!(!q.next(words.len()));

        let score = q.score();
        assert_eq!((score.correct, score.total, score.percentage), (5, 5, 100));
    }

    #[test]
    fn reset_starts_over() {
        let words = words();
        let mut q = quiz();
        q.submit_answer(&words, "to love");
        q.next(words.len());
        q.reveal();

        q.reset(7);

        assert_eq!(q.current_index(), 0);
        assert!(q.answers().is_empty());
        assert!(!q.is_revealed());
        assert_eq!(q.score().percentage, 0);
    }
}
