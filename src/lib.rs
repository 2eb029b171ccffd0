//! Text-layer compositor for the Chalkies meme generator.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole editing session for one meme: a background image, the two text
//! layers ("top" and "bottom"), the pointer gesture state machine that moves,
//! rotates and scales them, the alignment-guide detector, and the full-scene
//! redraw onto a fixed-size square canvas. The host page only wires DOM events
//! to the [`wasm::MemeCanvas`] facade.
//!
//! Everything except [`engine::Engine`] and [`wasm`] is browser-agnostic, so
//! the gesture logic and the renderer (through the [`surface::Surface`] trait)
//! are tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`layer`] | The two text layers, their positions and transforms |
//! | [`metrics`] | Approximate text bounding boxes |
//! | [`viewport`] | Client-space to surface-space coordinate mapping |
//! | [`hit`] | Hit-testing against layer bodies and handles |
//! | [`input`] | Drag modes and the gesture state machine types |
//! | [`guides`] | Alignment-guide detection |
//! | [`background`] | Background image source and load state |
//! | [`surface`] | The raster-surface drawing contract |
//! | [`render`] | Full-scene rendering |
//! | [`export`] | Download names and share-intent URLs |
//! | [`templates`] | Built-in meme template catalog |
//! | [`config`] | Editor configuration |
//! | [`error`] | Error type |
//! | [`wasm`] | `wasm-bindgen` facade for the host page |
//! | [`consts`] | Shared numeric constants |

pub mod background;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod export;
pub mod guides;
pub mod hit;
pub mod input;
pub mod layer;
pub mod metrics;
pub mod render;
pub mod surface;
pub mod templates;
pub mod viewport;
pub mod wasm;
