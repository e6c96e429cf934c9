//! # contact-db
//!
//! Persistence layer implementing the repository and unit-of-work traits.
//!
//! ## Overview
//!
//! This crate provides two implementations of the traits defined in
//! `contact-core`:
//!
//! - PostgreSQL via SQLx (`PgTransactionManager`), with connection pool
//!   management, runtime migrations, `FromRow` models, and model to entity mappers
//! - An in-process transactional store (`MemoryStore`) used by tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contact_db::{create_pool, run_migrations, DatabaseConfig, PgTransactionManager};
//! use contact_core::TransactionManager;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!
//!     let manager = PgTransactionManager::new(pool);
//!     let mut uow = manager.begin().await?;
//!     let user = uow.users().find_by_id("khannedy").await?;
//!     uow.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryStore, MemoryUnitOfWork};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgTransactionManager, PgUnitOfWork};
