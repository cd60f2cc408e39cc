use std::sync::Arc;

use tracing::info;

use models::{Review, ReviewForm};

use crate::errors::ServiceError;
use crate::storage::JsonCollection;

/// Append-only visitor reviews.
#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<JsonCollection<Review>>,
}

impl ReviewService {
    pub fn new(reviews: Arc<JsonCollection<Review>>) -> Self {
        Self { reviews }
    }

    pub async fn list(&self) -> Vec<Review> {
        self.reviews.list().await
    }

    pub async fn submit(&self, form: ReviewForm) -> Result<Review, ServiceError> {
        let review = form.into_review()?;
        self.reviews.append(review.clone()).await?;
        info!(reviewer = %review.name, rating = ?review.rating, "review saved");
        Ok(review)
    }
}
