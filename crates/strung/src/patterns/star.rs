//! Star pattern: spokes radiating from the center, with strings woven
//! between adjacent spokes. The classic curve-stitching star.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Point, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::CanvasFrame;

#[derive(Debug, Clone, Default)]
pub struct Star;

impl Star {
    fn sides(config: &Config) -> usize {
        config.count("sides").max(3)
    }

    fn nails_per_spoke(config: &Config) -> usize {
        config.count("nails_per_side").max(1)
    }
}

impl PatternAlgorithm for Star {
    fn id(&self) -> &'static str {
        "star"
    }

    fn display_name(&self) -> &'static str {
        "Star"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("sides", "Sides", 8.0, 3.0, 24.0),
            OptionSpec::number("nails_per_side", "Nails per Side", 25.0, 1.0, 200.0),
            OptionSpec::number("inner_radius", "Inner Radius %", 0.0, 0.0, 100.0),
            OptionSpec::number("outer_radius", "Outer Radius %", 100.0, 0.0, 100.0),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![
            vec![("sides", Value::Number(5.0))],
            vec![
                ("sides", Value::Number(12.0)),
                ("inner_radius", Value::Number(30.0)),
            ],
        ]
    }

    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup> {
        let frame = CanvasFrame::new(size);
        let sides = Self::sides(config);
        let per_spoke = Self::nails_per_spoke(config);
        let (inner_pct, outer_pct) = config.range("inner_radius", "outer_radius");
        let r0 = frame.radius * inner_pct / 100.0;
        let r1 = frame.radius * outer_pct / 100.0;

        (0..sides)
            .map(|s| {
                let angle =
                    -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * s as f64 / sides as f64;
                let mut group = NailsGroup::new(format!("spoke-{}", s + 1));
                for i in 0..per_spoke {
                    let t = (i + 1) as f64 / per_spoke as f64;
                    let r = r0 + (r1 - r0) * t;
                    group.add(Point::new(
                        frame.center.x + r * angle.cos(),
                        frame.center.y + r * angle.sin(),
                    ));
                }
                group
            })
            .collect()
    }

    fn step_count(&self, config: &Config, _size: Size) -> usize {
        Self::sides(config) * Self::nails_per_spoke(config)
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let sides = Self::sides(config);
        let per_spoke = Self::nails_per_spoke(config);
        let spoke = index / per_spoke;
        let i = index % per_spoke;
        // Nail i on one spoke crosses to nail n-1-i on the next: strings fan
        // out from tip to root, forming the curved web between spokes.
        let from = layout.point(spoke * per_spoke + i);
        let to = layout.point(((spoke + 1) % sides) * per_spoke + (per_spoke - 1 - i));
        Line::between(from, to)
    }

    fn clone_box(&self) -> Box<dyn PatternAlgorithm> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_matches_layout() {
        let star = Star;
        let config = Config::from_schema(star.schema());
        let size = Size::square(1000.0);

        let nails: usize = star
            .layout_nails(&config, size)
            .iter()
            .map(NailsGroup::len)
            .sum();
        assert_eq!(nails, 8 * 25);
        assert_eq!(star.step_count(&config, size), 8 * 25);
    }

    #[test]
    fn strings_cross_adjacent_spokes() {
        let star = Star;
        let mut config = Config::from_schema(star.schema());
        config.set("sides", Value::Number(4.0));
        config.set("nails_per_side", Value::Number(2.0));
        let size = Size::square(100.0);
        let layout = NailLayout::from_groups(star.layout_nails(&config, size));

        // First string on spoke 0 reaches the far nail of spoke 1.
        let line = star.string_at(&layout, &config, size, 0);
        assert_eq!(line.start(), layout.point(0));
        assert_eq!(line.end(), layout.point(2 + 1));

        // Last string wraps from the final spoke back to spoke 0.
        let last = star.string_at(&layout, &config, size, 7);
        assert_eq!(last.start(), layout.point(7));
        assert_eq!(last.end(), layout.point(0));
    }

    #[test]
    fn inner_radius_pulls_nails_off_center() {
        let star = Star;
        let mut config = Config::from_schema(star.schema());
        config.set("inner_radius", Value::Number(50.0));
        let size = Size::square(100.0);
        let frame = CanvasFrame::new(size);

        let groups = star.layout_nails(&config, size);
        for nail in groups[0].iter() {
            let r = nail.at.distance(frame.center);
            assert!(r > frame.radius * 0.5 - 1e-9, "nail inside inner radius: {r}");
        }
    }
}
