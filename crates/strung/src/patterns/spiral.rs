//! Spiral pattern: one continuous thread hopping a fixed number of nails
//! around a circle. Every string starts where the previous one ended, so the
//! whole pattern renders as a single polyline.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::{CanvasFrame, circle_nails};

#[derive(Debug, Clone, Default)]
pub struct Spiral;

impl Spiral {
    fn nails(config: &Config) -> usize {
        config.count("nails").max(3)
    }
}

impl PatternAlgorithm for Spiral {
    fn id(&self) -> &'static str {
        "spiral"
    }

    fn display_name(&self) -> &'static str {
        "Spiral"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails", "Nails", 200.0, 3.0, 720.0),
            OptionSpec::number("skip", "Skip", 105.0, 1.0, 359.0),
            OptionSpec::number("turns", "Turns", 1.0, 1.0, 8.0),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![
            vec![("skip", Value::Number(89.0))],
            vec![("nails", Value::Number(360.0)), ("turns", Value::Number(3.0))],
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
        Self::nails(config) * config.count("turns").max(1)
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let n = Self::nails(config);
        let skip = config.count("skip").max(1);
        let from = (index * skip) % n;
        let to = ((index + 1) * skip) % n;
        Line::between(layout.point(from), layout.point(to))
    }

    fn continues(&self, _config: &Config, _index: usize) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn PatternAlgorithm> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_strings_share_an_endpoint() {
        let spiral = Spiral;
        let config = Config::from_schema(spiral.schema());
        let size = Size::square(100.0);
        let layout = NailLayout::from_groups(spiral.layout_nails(&config, size));

        for index in 1..20 {
            let prev = spiral.string_at(&layout, &config, size, index - 1);
            let next = spiral.string_at(&layout, &config, size, index);
            assert_eq!(prev.end(), next.start(), "thread breaks at index {index}");
        }
        assert!(spiral.continues(&config, 5));
    }

    #[test]
    fn turns_extend_the_thread() {
        let spiral = Spiral;
        let mut config = Config::from_schema(spiral.schema());
        config.set("turns", Value::Number(3.0));
        assert_eq!(spiral.step_count(&config, Size::square(100.0)), 600);
    }
}
