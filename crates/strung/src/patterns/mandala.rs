//! Mandala pattern: times-table cardioid on a circle of nails.
//!
//! Each layer connects nail `i` to nail `i * m mod n`; stacking layers with
//! increasing multipliers nests cardioids inside each other.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::{CanvasFrame, circle_nails};

#[derive(Debug, Clone, Default)]
pub struct Mandala;

impl Mandala {
    fn nails(config: &Config) -> usize {
        config.count("nails").max(3)
    }

    fn layers(config: &Config) -> usize {
        config.count("layers").max(1)
    }
}

impl PatternAlgorithm for Mandala {
    fn id(&self) -> &'static str {
        "mandala"
    }

    fn display_name(&self) -> &'static str {
        "Mandala"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails", "Nails", 180.0, 3.0, 720.0),
            OptionSpec::number("multiplier", "Multiplier", 2.0, 2.0, 30.0),
            OptionSpec::number("layers", "Layers", 2.0, 1.0, 6.0),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![
            vec![("multiplier", Value::Number(3.0)), ("layers", Value::Number(1.0))],
            vec![("nails", Value::Number(360.0)), ("layers", Value::Number(4.0))],
        ]
    }

    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup> {
        let frame = CanvasFrame::new(size);
        let mut ring = NailsGroup::new("ring");
        circle_nails(
            &mut ring,
            frame.center,
            frame.radius,
            Self::nails(config),
            -std::f64::consts::FRAC_PI_2,
        );
        vec![ring]
    }

    fn step_count(&self, config: &Config, _size: Size) -> usize {
        Self::layers(config) * Self::nails(config)
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let n = Self::nails(config);
        let layer = index / n;
        let i = index % n;
        let multiplier = config.count("multiplier").max(2) + layer;
        Line::between(layout.point(i), layout.point((i * multiplier) % n))
    }

    fn clone_box(&self) -> Box<dyn PatternAlgorithm> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_multiply_step_count() {
        let mandala = Mandala;
        let mut config = Config::from_schema(mandala.schema());
        config.set("layers", Value::Number(3.0));
        assert_eq!(mandala.step_count(&config, Size::square(100.0)), 3 * 180);
    }

    #[test]
    fn doubling_maps_index_to_twice_index() {
        let mandala = Mandala;
        let mut config = Config::from_schema(mandala.schema());
        config.set("nails", Value::Number(10.0));
        config.set("layers", Value::Number(1.0));
        let size = Size::square(100.0);
        let layout = NailLayout::from_groups(mandala.layout_nails(&config, size));

        let line = mandala.string_at(&layout, &config, size, 7);
        assert_eq!(line.start(), layout.point(7));
        assert_eq!(line.end(), layout.point(4), "2 * 7 mod 10");
    }

    #[test]
    fn later_layers_use_larger_multiplier() {
        let mandala = Mandala;
        let mut config = Config::from_schema(mandala.schema());
        config.set("nails", Value::Number(10.0));
        let size = Size::square(100.0);
        let layout = NailLayout::from_groups(mandala.layout_nails(&config, size));

        // Layer 1, i = 3, multiplier 2 + 1 = 3.
        let line = mandala.string_at(&layout, &config, size, 13);
        assert_eq!(line.start(), layout.point(3));
        assert_eq!(line.end(), layout.point(9));
    }
}
