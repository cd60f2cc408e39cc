//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Signup, login and account removal over a user repository.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
