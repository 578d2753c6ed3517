pub mod options;
pub mod score;
pub mod session;

pub use options::generate_options;
pub use score::score;
pub use session::QuizSession;
