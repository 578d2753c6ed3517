use crate::data::models::{Answer, Score};

pub fn score(answers: &[Answer]) -> Score {
    let total = answers.len();
    let correct = answers.iter().filter(|a| a.is_correct).count();
    Score {
        correct,
        total,
        percentage: percentage(correct, total),
    }
}

/// Rounded share of `correct` in `total`, 0 when nothing was answered.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct as f64 / total as f64) * 100.0).round() as u8
}
