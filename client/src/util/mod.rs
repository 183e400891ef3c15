//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (pointer mapping, file export,
//! object URLs) and pure link building from component logic.

pub mod canvas_input;
pub mod export;
pub mod object_url;
pub mod share;
