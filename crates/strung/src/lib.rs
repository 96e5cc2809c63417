//! # strung
//!
//! String art pattern generation engine.
//!
//! Patterns are pure functions over (config, size, index); the driver in
//! [`pattern`] turns that purity into a lazy, seekable, countable string
//! sequence that any [`renderer::Renderer`] backend can consume.

pub mod config;
pub mod geometry;
pub mod nails;
pub mod pattern;
pub mod patterns;
pub mod registry;
pub mod renderer;
pub mod svg_render;

// Re-export common types at crate root for convenience.
pub use config::{Config, OptionSpec, Value};
pub use geometry::{Line, Point, Size};
pub use nails::{Nail, NailRenderOptions, NailsGroup};
pub use pattern::{
    ConfigPatch, DrawOptions, DrawState, NailLayout, PatternAlgorithm, PatternInstance, Strings,
};
pub use registry::{PatternError, PatternRegistry};
pub use renderer::{CountingRenderer, RecordingRenderer, RenderCall, Renderer};
pub use svg_render::SvgRenderer;
