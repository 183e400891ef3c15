//! Networking modules for the meme REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the response schema
//! shared with the server's JSON bodies.

pub mod api;
pub mod types;
