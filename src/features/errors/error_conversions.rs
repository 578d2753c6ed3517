use tower_sessions::session::Error as SessionError;
use crate::data::models::AppError;

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::SessionError(err.to_string())
    }
}
