//! Seller listings: create with an optional uploaded image, delete by id.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use models::{Listing, ListingForm};

use crate::errors::ServiceError;
use crate::storage::JsonCollection;
use crate::uploads::{ImageStore, StoredImage};

#[derive(Clone)]
pub struct ListingService {
    listings: Arc<JsonCollection<Listing>>,
    images: ImageStore,
}

impl ListingService {
    pub fn new(listings: Arc<JsonCollection<Listing>>, images: ImageStore) -> Self {
        Self { listings, images }
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub async fn list(&self) -> Vec<Listing> {
        self.listings.list().await
    }

    pub async fn get(&self, id: &str) -> Option<Listing> {
        self.listings.find(|l| l.id == id).await
    }

    /// Validate the form, build the listing and append it.
    pub async fn create(&self, form: ListingForm, image: Option<StoredImage>) -> Result<Listing, ServiceError> {
        let listing = form.into_listing(image.map(|i| i.url), Utc::now())?;
        self.listings.append(listing.clone()).await?;
        info!(listing_id = %listing.id, seller = %listing.seller.name, "listing created");
        Ok(listing)
    }

    /// Delete the listing's uploaded image (if any) and the listing itself.
    /// Unknown ids succeed without changing anything.
    pub async fn delete(&self, id: &str) -> Result<usize, ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::Validation("Listing ID is required.".into()));
        }
        if let Some(listing) = self.get(id).await {
            if !listing.image_url.is_empty() && !listing.has_placeholder_image() {
                self.images.remove_by_url(&listing.image_url).await;
            }
        }
        let removed = self.listings.remove(|l| l.id == id).await?;
        info!(listing_id = %id, removed, "listing deleted");
        Ok(removed)
    }
}
