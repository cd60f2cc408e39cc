use axum::{extract::State, response::Redirect, Form, Json};

use models::{Review, ReviewForm};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.reviews.list().await)
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<ReviewForm>) -> Result<Redirect, ApiError> {
    state
        .reviews
        .submit(form)
        .await
        .map_err(|e| ApiError::service(e, "Error saving review."))?;
    Ok(Redirect::to("/"))
}
