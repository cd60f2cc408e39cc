use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::filled;
use crate::numeric::{null_as_nan, parse_float_lenient};

/// Image reference used when a listing is created without an upload.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg?height=200&width=200";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

/// A second-hand product offered by a seller.
///
/// The id is written under `_id` to stay readable by existing listing files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub seller: Seller,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "null_as_nan")]
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub is_new: bool,
    pub rating: f64,
    pub review_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn has_placeholder_image(&self) -> bool {
        self.image_url.contains("placeholder")
    }
}

/// Seller submission as posted by the listing form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub seller_name: Option<String>,
    pub seller_email: Option<String>,
    pub seller_phone: Option<String>,
    pub seller_address: Option<String>,
    pub seller_city: Option<String>,
    pub seller_state: Option<String>,
    pub seller_pincode: Option<String>,
    pub product_name: Option<String>,
    pub product_brand: Option<String>,
    pub product_price: Option<String>,
    pub product_original_price: Option<String>,
    pub product_size: Option<String>,
    pub product_condition: Option<String>,
    pub product_description: Option<String>,
}

impl ListingForm {
    /// Build a form from raw text fields, e.g. collected from a multipart body.
    /// Unknown field names are ignored.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let map: serde_json::Map<String, serde_json::Value> =
            fields.into_iter().map(|(k, v)| (k, serde_json::Value::String(v))).collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let required = [
            &self.seller_name,
            &self.seller_email,
            &self.seller_phone,
            &self.product_name,
            &self.product_price,
        ];
        if required.iter().all(|f| filled(f)) {
            Ok(())
        } else {
            Err(ModelError::Validation("All required fields must be filled.".into()))
        }
    }

    /// Validate and turn the submission into a fresh listing. The id is the
    /// creation time in epoch milliseconds.
    pub fn into_listing(self, image_url: Option<String>, now: DateTime<Utc>) -> Result<Listing, ModelError> {
        self.validate()?;
        let price = parse_float_lenient(self.product_price.as_deref().unwrap_or_default());
        let original_price = self
            .product_original_price
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_float_lenient);

        Ok(Listing {
            id: now.timestamp_millis().to_string(),
            seller: Seller {
                name: self.seller_name.unwrap_or_default(),
                email: self.seller_email.unwrap_or_default(),
                phone: self.seller_phone.unwrap_or_default(),
                address: self.seller_address,
                city: self.seller_city,
                state: self.seller_state,
                pincode: self.seller_pincode,
            },
            name: self.product_name.unwrap_or_default(),
            brand: self.product_brand,
            price,
            original_price,
            size: self.product_size,
            condition: self.product_condition,
            description: self.product_description,
            image_url: image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            is_new: true,
            rating: 0.0,
            review_count: 0,
            created_at: now,
        })
    }
}
