//! Repository implementations for the domain store.
//!
//! # Repositories
//!
//! - [`PgDomainRepository`] - PostgreSQL-backed store (production)
//! - [`MemoryDomainRepository`] - in-process store for tests and ephemeral
//!   deployments

pub mod memory_domain_repository;
pub mod pg_domain_repository;

pub use memory_domain_repository::MemoryDomainRepository;
pub use pg_domain_repository::PgDomainRepository;
