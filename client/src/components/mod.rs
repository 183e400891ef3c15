//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor and gallery while reading/writing shared
//! state from Leptos context providers.

pub mod canvas_host;
pub mod gallery;
pub mod meme_editor;
pub mod share_popup;
