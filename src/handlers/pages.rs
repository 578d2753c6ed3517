use axum::{
    extract::Query,
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::{
    data::models::{HskLevel, LevelsParams},
    utils::render_template,
};

// Mode selection
pub async fn home(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    let mut context = Context::new();
    context.insert("title", "HSK Flashcard");
    render_template(&templates, "choose_mode.html", context)
}

pub async fn levels(
    Extension(templates): Extension<Arc<Tera>>,
    Query(params): Query<LevelsParams>,
) -> impl IntoResponse {
    let levels: Vec<u8> = HskLevel::all().map(HskLevel::value).collect();

    let mut context = Context::new();
    context.insert("title", "Select HSK Level");
    context.insert("mode", params.mode.as_str());
    context.insert("levels", &levels);
    render_template(&templates, "level_selector.html", context)
}
