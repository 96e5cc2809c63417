//! Common utilities shared across CLI commands.

use serde::Serialize;

use strung::{Line, PatternInstance, Size, Value};

/// Output format for generated strings.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Parse a `WIDTHxHEIGHT` size argument, e.g. `800x600`.
pub fn parse_size(arg: &str) -> Option<Size> {
    let (w, h) = arg.split_once(['x', 'X'])?;
    let width: f64 = w.trim().parse().ok()?;
    let height: f64 = h.trim().parse().ok()?;
    if width > 0.0 && height > 0.0 {
        Some(Size::new(width, height))
    } else {
        None
    }
}

/// Parse a `key=value` config override. Values parse as numbers first, then
/// booleans, then fall back to color strings.
pub fn parse_set(arg: &str) -> Option<(String, Value)> {
    let (key, raw) = arg.split_once('=')?;
    let value = if let Ok(n) = raw.parse::<f64>() {
        Value::Number(n)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::Bool(b)
    } else {
        Value::Color(raw.to_string())
    };
    Some((key.to_string(), value))
}

/// Apply parsed `key=value` overrides to an instance.
pub fn apply_sets(instance: &mut PatternInstance, sets: &[(String, Value)]) {
    let patch: Vec<(&str, Value)> = sets
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();
    instance.assign_config(&patch);
}

/// Canvas sized to the pattern's preferred aspect ratio at a given height.
pub fn canvas_for(instance: &PatternInstance, height: f64) -> Size {
    Size::new(height * instance.aspect_ratio(), height)
}

/// One string in JSON output.
#[derive(Serialize)]
pub struct JsonLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl From<Line> for JsonLine {
    fn from(line: Line) -> Self {
        Self {
            x1: line.x1,
            y1: line.y1,
            x2: line.x2,
            y2: line.y2,
        }
    }
}

/// JSON document for the render command.
#[derive(Serialize)]
pub struct JsonRender {
    pub pattern: String,
    pub width: f64,
    pub height: f64,
    pub step_count: usize,
    pub nail_count: usize,
    pub strings: Vec<JsonLine>,
}
