use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::models::{QuizOption, Word};

pub const DISTRACTOR_COUNT: usize = 3;

/// Builds the shuffled choices for one question: the correct word's first meaning
/// plus up to [`DISTRACTOR_COUNT`] distinct meanings drawn from the rest of the pool.
pub fn generate_options<R: Rng + ?Sized>(
    correct: &Word,
    pool: &[Word],
    rng: &mut R,
) -> Vec<QuizOption> {
    let correct_meaning = correct.primary_meaning();

    let mut others: Vec<&Word> = pool
        .iter()
        .filter(|w| w.simplified != correct.simplified)
        .collect();
    others.shuffle(rng);

    let mut distractors: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT);
    for word in others {
        if distractors.len() == DISTRACTOR_COUNT {
            break;
        }
        let meaning = word.primary_meaning();
        if meaning.is_empty() || meaning == correct_meaning || distractors.contains(&meaning) {
            continue;
        }
        distractors.push(meaning);
    }

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(QuizOption {
        text: correct_meaning.to_string(),
        is_correct: true,
    });
    options.extend(distractors.into_iter().map(|text| QuizOption {
        text: text.to_string(),
        is_correct: false,
    }));

    options.shuffle(rng);
    options
}
