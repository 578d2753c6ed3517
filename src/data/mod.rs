pub mod loader;
pub mod models;

pub use loader::{Vocabulary, VocabularyLoader};
