//! Meme services: image validation and storage backends.
//!
//! ARCHITECTURE
//! ============
//! Routes stay thin: `upload` decides whether a payload is an acceptable
//! image, `store` defines the storage seam, and `pg_store` is the Postgres
//! implementation behind it.

pub mod image_kind;
pub mod pg_store;
pub mod store;
pub mod upload;
