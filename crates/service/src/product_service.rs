use std::sync::Arc;

use tracing::info;

use models::{Product, ProductForm};

use crate::errors::ServiceError;
use crate::storage::JsonCollection;

/// Operator-managed catalogue products.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<JsonCollection<Product>>,
}

impl ProductService {
    pub fn new(products: Arc<JsonCollection<Product>>) -> Self {
        Self { products }
    }

    pub async fn list(&self) -> Vec<Product> {
        self.products.list().await
    }

    pub async fn add(&self, form: ProductForm) -> Result<Product, ServiceError> {
        let product = form.into_product()?;
        self.products.append(product.clone()).await?;
        info!(product = %product.name, "product saved");
        Ok(product)
    }
}
