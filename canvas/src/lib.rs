//! Meme compositing and caption-drag engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editor surface: the image + caption document, hit-testing the caption for
//! drag start, the pointer state machine that moves it, and painting the
//! composite onto a 2D canvas. The host UI layer only wires DOM events and
//! image-load callbacks into the engine and acts on the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | The meme document: image source, caption, anchor |
//! | [`geom`] | Points and rectangles in canvas space |
//! | [`text`] | Caption width measurement |
//! | [`hit`] | Caption bounding box and hit test |
//! | [`input`] | Pointer buttons and the drag state machine |
//! | [`render`] | Painting the composite to a `CanvasRenderingContext2d` |
//! | [`consts`] | Surface size, caption font and colors |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod text;
