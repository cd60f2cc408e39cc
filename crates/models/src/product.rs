use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::filled;
use crate::numeric::{null_as_nan, parse_float_lenient};

/// Catalogue entry added directly by an operator, with an externally hosted image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_nan")]
    pub price: f64,
    pub image_url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl ProductForm {
    pub fn into_product(self) -> Result<Product, ModelError> {
        if !(filled(&self.name) && filled(&self.description) && filled(&self.price) && filled(&self.image_url)) {
            return Err(ModelError::Validation("All fields are required.".into()));
        }
        Ok(Product {
            price: parse_float_lenient(self.price.as_deref().unwrap_or_default()),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
        })
    }
}
