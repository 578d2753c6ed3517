pub mod errors;
pub mod flashcard;
pub mod quiz;
