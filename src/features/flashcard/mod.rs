pub mod session;

pub use session::FlashcardSession;
