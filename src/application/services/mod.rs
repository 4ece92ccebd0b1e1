//! Business logic services for the application layer.

pub mod auth_service;
pub mod domain_service;

pub use auth_service::AuthService;
pub use domain_service::{BatchInsert, DomainService};
