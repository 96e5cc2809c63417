//! Pattern registry: string id to instance factory.

use std::fmt;

use crate::geometry::Size;
use crate::pattern::{PatternAlgorithm, PatternInstance};
use crate::patterns::{Eye, Mandala, Parabola, Spiral, Star, Wave};

/// Canvas used when an instance is created without an explicit size.
/// Callers resize through `set_size` before drawing to a real surface.
pub const DEFAULT_CANVAS: Size = Size {
    width: 1000.0,
    height: 1000.0,
};

/// Errors from registry lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// No pattern registered under the given id.
    NotFound(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::NotFound(id) => write!(f, "no pattern registered as '{id}'"),
        }
    }
}

impl std::error::Error for PatternError {}

struct Entry {
    id: &'static str,
    factory: fn() -> Box<dyn PatternAlgorithm>,
}

/// Registry of available pattern algorithms.
pub struct PatternRegistry {
    entries: Vec<Entry>,
}

impl PatternRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with every built-in pattern.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("star", || Box::new(Star));
        registry.register("eye", || Box::new(Eye));
        registry.register("mandala", || Box::new(Mandala));
        registry.register("spiral", || Box::new(Spiral));
        registry.register("parabola", || Box::new(Parabola));
        registry.register("wave", || Box::new(Wave));
        registry
    }

    /// Register a factory. A repeated id replaces the earlier entry.
    pub fn register(&mut self, id: &'static str, factory: fn() -> Box<dyn PatternAlgorithm>) {
        self.entries.retain(|entry| entry.id != id);
        self.entries.push(Entry { id, factory });
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Instantiate a pattern at the default canvas size.
    pub fn create(&self, id: &str) -> Result<PatternInstance, PatternError> {
        self.create_sized(id, DEFAULT_CANVAS)
    }

    /// Instantiate a pattern at a specific canvas size.
    pub fn create_sized(&self, id: &str, size: Size) -> Result<PatternInstance, PatternError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PatternError::NotFound(id.to_string()))?;
        Ok(PatternInstance::new((entry.factory)(), size))
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
