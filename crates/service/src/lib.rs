//! Service layer for the marketplace.
//! - `storage::JsonCollection` keeps each record type in its own JSON file.
//! - Services validate form input through `models` before mutating a collection.
//! - Auth hashes passwords and checks credentials over a `UserRepository`.

pub mod errors;
pub mod auth;
pub mod runtime;
pub mod storage;
pub mod uploads;
pub mod listing_service;
pub mod review_service;
pub mod product_service;

pub use listing_service::ListingService;
pub use product_service::ProductService;
pub use review_service::ReviewService;
