//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is wrapped in an `RwSignal` and provided through Leptos
//! context by `App`. The structs themselves are plain data with small
//! transition methods so they can be tested without a browser.

pub mod editor;
pub mod gallery;
