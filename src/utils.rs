use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::data::models::AppError;

mod session;

pub use session::{load_flashcard, load_quiz, save_flashcard, save_quiz};

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(tera.render(template_name, &context).unwrap_or_else(|e| {
        log::error!("Failed to render {}: {}", template_name, e);
        format!("Error rendering template: {}", template_name)
    }))
}

/// Template context built from a serializable view; the view must be a struct or map.
pub fn view_context<T: Serialize>(view: &T) -> Result<Context, AppError> {
    Context::from_serialize(view).map_err(|e| {
        log::error!("Failed to build template context: {}", e);
        AppError::RenderError(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[derive(Serialize)]
    struct View {
        total: usize,
    }

    #[test]
    fn builds_context_from_struct() {
        let context = view_context(&View { total: 3 }).unwrap();
        assert_eq!(context.get("total"), Some(&serde_json::json!(3)));
    }

    #[test]
    fn non_object_view_is_a_server_error() {
        let err = view_context(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, AppError::RenderError(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
