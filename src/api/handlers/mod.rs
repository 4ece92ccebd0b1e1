//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod domains;
pub mod health;
pub mod redirect;

pub use auth::{login_handler, logout_handler};
pub use domains::{
    batch_create_domains_handler, create_domain_handler, delete_domain_handler,
    domain_list_handler, update_domain_handler,
};
pub use health::{health_handler, ping_handler};
pub use redirect::{first_domain_handler, root_redirect_handler};
