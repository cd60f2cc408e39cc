//! Storage abstractions for service layer
//!
//! Holds the file-backed collection every marketplace record type is kept in.

pub mod json_collection;

pub use json_collection::JsonCollection;
