use axum::{
    extract::{Multipart, State},
    response::Redirect,
    Form, Json,
};
use serde::Deserialize;
use tracing::debug;

use models::{Listing, ListingForm};

use crate::errors::ApiError;
use crate::state::AppState;

/// Multipart field carrying the optional product photo.
pub const IMAGE_FIELD: &str = "productImage";

struct PendingImage {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Listing>> {
    Json(state.listings.list().await)
}

/// `POST /add-listing` (multipart). The image is checked while streaming and
/// only written once the text fields validate.
pub async fn add(State(state): State<AppState>, mut multipart: Multipart) -> Result<Redirect, ApiError> {
    let images = state.listings.images();
    let mut fields = Vec::new();
    let mut pending: Option<PendingImage> = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != IMAGE_FIELD {
            let value = field.text().await?;
            fields.push((name, value));
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        // browsers send an empty part when no file was chosen
        if file_name.as_deref().map_or(true, str::is_empty) {
            while field.chunk().await?.is_some() {}
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            bytes.extend_from_slice(&chunk);
            images
                .check(content_type.as_deref(), bytes.len())
                .map_err(|e| ApiError::service(e, "Error uploading image."))?;
        }
        pending = Some(PendingImage { file_name, content_type, bytes });
    }

    let form = ListingForm::from_fields(fields);
    form.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let image = match pending {
        Some(p) => Some(
            images
                .save(IMAGE_FIELD, p.file_name.as_deref(), p.content_type.as_deref(), &p.bytes)
                .await
                .map_err(|e| ApiError::service(e, "Error saving listing."))?,
        ),
        None => None,
    };

    let listing = state
        .listings
        .create(form, image)
        .await
        .map_err(|e| ApiError::service(e, "Error saving listing."))?;
    debug!(listing_id = %listing.id, "listing accepted");
    Ok(Redirect::to("/seller"))
}

#[derive(Debug, Deserialize)]
pub struct DeleteListingForm {
    #[serde(rename = "listingId")]
    pub listing_id: Option<String>,
}

pub async fn delete(State(state): State<AppState>, Form(form): Form<DeleteListingForm>) -> Result<Redirect, ApiError> {
    let id = form.listing_id.unwrap_or_default();
    state
        .listings
        .delete(&id)
        .await
        .map_err(|e| ApiError::service(e, "Error deleting listing."))?;
    Ok(Redirect::to("/seller"))
}
