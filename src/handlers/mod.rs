pub mod api;
pub mod flashcard;
pub mod pages;
pub mod quiz;
