use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::data::models::{HskLevel, LoadError, Word};

/// Word lists for every HSK level, loaded once at startup and shared read-only.
#[derive(Debug, Default)]
pub struct Vocabulary {
    levels: HashMap<HskLevel, Vec<Word>>,
}

impl Vocabulary {
    pub fn from_levels(levels: HashMap<HskLevel, Vec<Word>>) -> Self {
        Self { levels }
    }

    /// Words for a level. A level that failed to load is simply empty.
    pub fn words(&self, level: HskLevel) -> &[Word] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct VocabularyLoader {
    data_dir: PathBuf,
}

impl VocabularyLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn level_path(&self, level: HskLevel) -> PathBuf {
        self.data_dir.join(format!("{}.min.json", level))
    }

    pub async fn try_load_level(&self, level: HskLevel) -> Result<Vec<Word>, LoadError> {
        let path = self.level_path(level);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io {
                path: display(&path),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: display(&path),
            source,
        })
    }

    /// Loads a level, degrading to an empty list on any failure.
    pub async fn load_level(&self, level: HskLevel) -> Vec<Word> {
        match self.try_load_level(level).await {
            Ok(words) => {
                log::info!("Loaded {} words for HSK {}", words.len(), level);
                words
            }
            Err(e) => {
                log::warn!("Failed to load words for HSK {}: {}", level, e);
                Vec::new()
            }
        }
    }

    pub async fn load_all(&self) -> Vocabulary {
        let mut levels = HashMap::new();
        for level in HskLevel::all() {
            levels.insert(level, self.load_level(level).await);
        }
        Vocabulary::from_levels(levels)
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
