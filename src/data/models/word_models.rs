use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::models::AppError;

/// One entry of an HSK word list, as published in the compact `.min.json` files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Word {
    #[serde(rename = "s")]
    pub simplified: String,
    #[serde(rename = "r", default)]
    pub radical: String,
    #[serde(rename = "q", default)]
    pub frequency: u32,
    #[serde(rename = "p", default)]
    pub parts_of_speech: Vec<String>,
    #[serde(rename = "f", default)]
    pub forms: Vec<Form>,
}

/// A written form of a word: traditional characters, readings and meanings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Form {
    #[serde(rename = "t", default)]
    pub traditional: String,
    #[serde(rename = "i", default)]
    pub transcriptions: Transcriptions,
    #[serde(rename = "m", default)]
    pub meanings: Vec<String>,
    #[serde(rename = "c", default)]
    pub classifiers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transcriptions {
    #[serde(rename = "y", default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub numeric: Option<String>,
    #[serde(rename = "w", default, skip_serializing_if = "Option::is_none")]
    pub wade_giles: Option<String>,
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub bopomofo: Option<String>,
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub romatzyh: Option<String>,
}

impl Word {
    pub fn primary_form(&self) -> Option<&Form> {
        self.forms.first()
    }

    /// Pinyin of the first form, empty when the word has none.
    pub fn pinyin(&self) -> &str {
        self.primary_form()
            .and_then(|f| f.transcriptions.pinyin.as_deref())
            .unwrap_or("")
    }

    /// Traditional spelling of the first form, falling back to the simplified one.
    pub fn traditional(&self) -> &str {
        match self.primary_form() {
            Some(form) if !form.traditional.is_empty() => &form.traditional,
            _ => &self.simplified,
        }
    }

    pub fn meanings(&self) -> &[String] {
        self.primary_form()
            .map(|f| f.meanings.as_slice())
            .unwrap_or(&[])
    }

    /// The meaning a quiz treats as the answer for this word.
    pub fn primary_meaning(&self) -> &str {
        self.meanings().first().map(String::as_str).unwrap_or("")
    }
}

/// HSK level, 1 through 6 plus the informal 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HskLevel(u8);

impl HskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn all() -> impl Iterator<Item = HskLevel> {
        (Self::MIN..=Self::MAX).map(HskLevel)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HskLevel {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(HskLevel(value))
        } else {
            Err(AppError::InvalidLevel(value.to_string()))
        }
    }
}

impl FromStr for HskLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| AppError::InvalidLevel(s.to_string()))
            .and_then(HskLevel::try_from)
    }
}

impl From<HskLevel> for u8 {
    fn from(level: HskLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Flashcard,
    Quiz,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Flashcard => "flashcard",
            Mode::Quiz => "quiz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_word_entry() {
        let json = r#"{"s":"爱","r":"爫","q":1,"p":["v"],
            "f":[{"t":"愛","i":{"y":"ài","n":"ai4"},"m":["to love","affection"],"c":[]}]}"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word.simplified, "爱");
        assert_eq!(word.traditional(), "愛");
        assert_eq!(word.pinyin(), "ài");
        assert_eq!(word.primary_meaning(), "to love");
        assert_eq!(word.forms[0].transcriptions.numeric.as_deref(), Some("ai4"));
        assert!(word.forms[0].transcriptions.bopomofo.is_none());
    }

    #[test]
    fn word_without_forms_has_empty_projection() {
        let word: Word = serde_json::from_str(r#"{"s":"好"}"#).unwrap();

        assert_eq!(word.traditional(), "好");
        assert_eq!(word.pinyin(), "");
        assert!(word.meanings().is_empty());
        assert_eq!(word.primary_meaning(), "");
    }

    #[test]
    fn level_bounds() {
        assert!(HskLevel::try_from(0).is_err());
        assert!(HskLevel::try_from(8).is_err());
        assert_eq!(HskLevel::try_from(7).unwrap().value(), 7);
        assert_eq!(HskLevel::all().count(), 7);
        assert!(serde_json::from_str::<HskLevel>("9").is_err());
    }

    #[test]
    fn parses_level_from_path_segment() {
        assert_eq!("3".parse::<HskLevel>().unwrap().value(), 3);
        for bad in ["0", "8", "300", "abc", "", "-1"] {
            assert!(matches!(bad.parse::<HskLevel>(), Err(AppError::InvalidLevel(_))));
        }
    }

    #[test]
    fn mode_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Quiz).unwrap(), "\"quiz\"");
        assert_eq!(serde_json::from_str::<Mode>("\"flashcard\"").unwrap(), Mode::Flashcard);
    }
}
