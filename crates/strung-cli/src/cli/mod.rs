//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `render` - Render a pattern to SVG or JSON
//! - `benchmark` - Benchmark string generation performance
//! - `harness` - Run every pattern through the measurement backends
//! - `patterns` - List available patterns

pub mod benchmark;
pub mod common;
pub mod harness;
pub mod render;

pub use benchmark::cmd_benchmark;
pub use harness::{cmd_harness, HarnessReport, HarnessResult};
pub use render::cmd_render;
