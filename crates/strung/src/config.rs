//! Pattern configuration: declared option schemas with clamped assignment.
//!
//! Every pattern declares the options it understands as an [`OptionSpec`]
//! list. A [`Config`] is built from that schema with defaults filled in, and
//! assignments are clamped to the declared range instead of rejected, so a
//! slider or script can never push a pattern into an invalid state.

use std::collections::BTreeMap;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    /// CSS-style color string, e.g. `#d94f37`.
    Color(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&str> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }
}

/// Declaration of one configurable option: key, display label, default and
/// (for numeric options) the allowed range.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub default: Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl OptionSpec {
    /// Numeric option with an inclusive range.
    pub fn number(key: &'static str, label: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            key,
            label,
            default: Value::Number(default),
            min: Some(min),
            max: Some(max),
        }
    }

    /// Boolean option.
    pub fn flag(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            default: Value::Bool(default),
            min: None,
            max: None,
        }
    }

    /// Color option.
    pub fn color(key: &'static str, label: &'static str, default: &str) -> Self {
        Self {
            key,
            label,
            default: Value::Color(default.to_string()),
            min: None,
            max: None,
        }
    }

    /// Clamp a candidate value into this option's declared range.
    pub fn clamp(&self, value: Value) -> Value {
        match value {
            Value::Number(mut n) => {
                if let Some(min) = self.min {
                    n = n.max(min);
                }
                if let Some(max) = self.max {
                    n = n.min(max);
                }
                Value::Number(n)
            }
            other => other,
        }
    }
}

/// Configuration store for one pattern instance.
///
/// Immutable during a draw pass by construction: the engine only reads it
/// between `init_draw` boundaries.
#[derive(Debug, Clone)]
pub struct Config {
    schema: Vec<OptionSpec>,
    values: BTreeMap<&'static str, Value>,
}

impl Config {
    /// Build a config from a schema, with every option at its default.
    pub fn from_schema(schema: Vec<OptionSpec>) -> Self {
        let values = schema
            .iter()
            .map(|spec| (spec.key, spec.default.clone()))
            .collect();
        Self { schema, values }
    }

    /// The schema this config was built from.
    pub fn schema(&self) -> &[OptionSpec] {
        &self.schema
    }

    /// Set one option, clamping to the declared range.
    ///
    /// Unknown keys are ignored: a stale caller can never grow the option
    /// set beyond what the pattern declared.
    pub fn set(&mut self, key: &str, value: Value) {
        if let Some(spec) = self.schema.iter().find(|spec| spec.key == key) {
            let clamped = spec.clamp(value);
            self.values.insert(spec.key, clamped);
        }
    }

    /// Merge a partial option list into this config.
    pub fn assign(&mut self, partial: &[(&str, Value)]) {
        for (key, value) in partial {
            self.set(key, value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Numeric option value; 0.0 for missing or non-numeric keys.
    pub fn number(&self, key: &str) -> f64 {
        self.get(key).and_then(Value::as_number).unwrap_or(0.0)
    }

    /// Numeric option rounded to a non-negative count.
    pub fn count(&self, key: &str) -> usize {
        self.number(key).round().max(0.0) as usize
    }

    /// Boolean option value; false for missing keys.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Color option value; black for missing keys.
    pub fn color(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_color).unwrap_or("#000000")
    }

    /// Read a paired min/max range, correcting an inverted pair by raising
    /// the maximum to the minimum rather than failing.
    pub fn range(&self, min_key: &str, max_key: &str) -> (f64, f64) {
        let lo = self.number(min_key);
        let hi = self.number(max_key);
        (lo, hi.max(lo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails", "Nails", 100.0, 3.0, 300.0),
            OptionSpec::flag("mirror", "Mirror", false),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    #[test]
    fn defaults_from_schema() {
        let config = Config::from_schema(schema());
        assert_eq!(config.number("nails"), 100.0);
        assert!(!config.flag("mirror"));
        assert_eq!(config.color("nail_color"), "#444444");
    }

    #[test]
    fn set_clamps_to_range() {
        let mut config = Config::from_schema(schema());

        config.set("nails", Value::Number(1000.0));
        assert_eq!(config.number("nails"), 300.0);

        config.set("nails", Value::Number(-5.0));
        assert_eq!(config.number("nails"), 3.0);
    }

    #[test]
    fn unknown_keys_ignored() {
        let mut config = Config::from_schema(schema());
        config.set("bogus", Value::Number(1.0));
        assert!(config.get("bogus").is_none());
    }

    #[test]
    fn assign_merges_partial() {
        let mut config = Config::from_schema(schema());
        config.assign(&[
            ("nails", Value::Number(50.0)),
            ("mirror", Value::Bool(true)),
        ]);
        assert_eq!(config.number("nails"), 50.0);
        assert!(config.flag("mirror"));
        // Untouched options keep their defaults.
        assert_eq!(config.color("nail_color"), "#444444");
    }

    #[test]
    fn inverted_range_raises_maximum() {
        let mut config = Config::from_schema(vec![
            OptionSpec::number("r_min", "Inner", 10.0, 0.0, 100.0),
            OptionSpec::number("r_max", "Outer", 90.0, 0.0, 100.0),
        ]);
        config.set("r_min", Value::Number(95.0));
        let (lo, hi) = config.range("r_min", "r_max");
        assert_eq!(lo, 95.0);
        assert_eq!(hi, 95.0, "maximum should be raised to the minimum");
    }

    #[test]
    fn count_rounds_and_floors_at_zero() {
        let mut config = Config::from_schema(schema());
        config.set("nails", Value::Number(49.6));
        assert_eq!(config.count("nails"), 50);
    }
}
