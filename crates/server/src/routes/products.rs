use axum::{extract::State, response::Redirect, Form, Json};

use models::{Product, ProductForm};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

pub async fn add(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Result<Redirect, ApiError> {
    state
        .products
        .add(form)
        .await
        .map_err(|e| ApiError::service(e, "Error saving product."))?;
    Ok(Redirect::to("/"))
}
