use std::sync::Arc;

use configs::AppConfig;
use models::{Listing, Product, Review, User};
use service::{
    auth::{
        repo::FileUserRepository,
        service::{AuthConfig, AuthService},
    },
    storage::JsonCollection,
    uploads::ImageStore,
    ListingService, ProductService, ReviewService,
};

use crate::errors::StartupError;

/// Shared handler state: one service per collection.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<FileUserRepository>>,
    pub listings: ListingService,
    pub reviews: ReviewService,
    pub products: ProductService,
}

impl AppState {
    /// Load every collection from disk. Any unreadable or corrupt file aborts.
    pub async fn build(cfg: &AppConfig) -> Result<Self, StartupError> {
        let users = JsonCollection::<User>::load(cfg.storage.users_path()).await?;
        let listings = JsonCollection::<Listing>::load(cfg.storage.listings_path()).await?;
        let reviews = JsonCollection::<Review>::load(cfg.storage.reviews_path()).await?;
        let products = JsonCollection::<Product>::load(cfg.storage.products_path()).await?;

        let auth_cfg = AuthConfig {
            memory_kib: cfg.auth.memory_kib,
            iterations: cfg.auth.iterations,
            parallelism: cfg.auth.parallelism,
        };
        let auth = AuthService::new(Arc::new(FileUserRepository::new(users)), auth_cfg)
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        let images = ImageStore::new(cfg.uploads.upload_dir(), cfg.uploads.max_file_bytes);

        Ok(Self {
            auth: Arc::new(auth),
            listings: ListingService::new(listings, images),
            reviews: ReviewService::new(reviews),
            products: ProductService::new(products),
        })
    }
}
