use serde::{Deserialize, Serialize};

use crate::data::models::{Flashcard, HskLevel, Word};

/// Position and flip state of a flashcard run over one level's word list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashcardSession {
    level: HskLevel,
    current_index: usize,
    is_flipped: bool,
}

impl FlashcardSession {
    pub fn new(level: HskLevel) -> Self {
        Self {
            level,
            current_index: 0,
            is_flipped: false,
        }
    }

    pub fn level(&self) -> HskLevel {
        self.level
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn current_card(&self, words: &[Word]) -> Option<Flashcard> {
        let word = words.get(self.current_index)?;
        Some(Flashcard {
            simplified: word.simplified.clone(),
            traditional: word.traditional().to_string(),
            pinyin: word.pinyin().to_string(),
            meanings: word.meanings().to_vec(),
            level: self.level,
        })
    }

    pub fn next(&mut self, total: usize) -> bool {
        if self.current_index + 1 < total {
            self.current_index += 1;
            self.is_flipped = false;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.is_flipped = false;
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "s": format!("字{}", i),
                    "f": [{"t": "", "i": {"y": format!("zi{}", i)}, "m": [format!("meaning {}", i)]}]
                }))
                .unwrap()
            })
            .collect()
    }

    fn session() -> FlashcardSession {
        FlashcardSession::new(HskLevel::try_from(1).unwrap())
    }

    #[test]
    fn projects_current_word() {
        let words = words(3);
        let card = session().current_card(&words).unwrap();

        assert_eq!(card.simplified, "字0");
        assert_eq!(card.traditional, "字0");
        assert_eq!(card.pinyin, "zi0");
        assert_eq!(card.meanings, vec!["meaning 0".to_string()]);
        assert_eq!(card.level.value(), 1);
    }

    #[test]
    fn empty_list_has_no_card() {
        assert!(session().current_card(&[]).is_none());
    }

    #[test]
    fn navigation_stays_in_range_and_unflips() {
        let words = words(2);
        let mut s = session();

        assert!(!s.previous());
        s.flip();
        assert!(s.is_flipped());

        assert!(s.next(words.len()));
        assert_eq!(s.current_index(), 1);
        assert!(!s.is_flipped());

        s.flip();
        assert!(!s.next(words.len()));
        assert_eq!(s.current_index(), 1);
        assert!(s.is_flipped());

        assert!(s.previous());
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_flipped());
    }

    #[test]
    fn next_on_empty_list_is_noop() {
        let mut s = session();
        assert!(!s.next(0));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn flip_toggles() {
        let mut s = session();
        s.flip();
        s.flip();
        assert!(!s.is_flipped());
    }
}
