//! Database module: connection manager, models and schema.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for every registered entity (PostgreSQL)
//! - `postgres.rs`: pool construction, per-request sessions, liveness

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::TestRow;
pub use postgres::{Database, DatabaseOptions, Session, normalize_database_url};
pub use schema::{EntitySchema, REGISTERED};
