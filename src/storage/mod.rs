//! Storage layer for quarterback records
//!
//! A thin abstraction over SQLite, organized into:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Lookup, upsert, listing and bulk delete

pub mod models;
pub mod queries;
pub mod schema;


pub use models::QuarterbackRecord;
pub use schema::QuarterbackDatabase;
