//! Record types persisted in the marketplace JSON collections, together with
//! the form inputs that produce them.

pub mod errors;
pub mod numeric;
pub mod user;
pub mod listing;
pub mod review;
pub mod product;

pub use listing::{Listing, ListingForm, Seller, PLACEHOLDER_IMAGE_URL};
pub use product::{Product, ProductForm};
pub use review::{Review, ReviewForm};
pub use user::User;

/// A form value counts as supplied only when present and non-empty.
pub(crate) fn filled(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.is_empty())
}
