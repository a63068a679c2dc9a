//! Configuration modules.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables (a `.env` file is honored via dotenvy).
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`pagination`]: page size for question listings

pub mod database;
pub mod pagination;
