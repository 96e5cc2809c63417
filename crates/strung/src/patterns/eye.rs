//! Eye pattern: a square of nails with strings stitched between adjacent
//! sides, leaving a lens-shaped opening in the middle.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Point, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::{CanvasFrame, edge_nails};

#[derive(Debug, Clone, Default)]
pub struct Eye;

impl Eye {
    fn nails_per_side(config: &Config) -> usize {
        config.count("nails_per_side").max(2)
    }
}

impl PatternAlgorithm for Eye {
    fn id(&self) -> &'static str {
        "eye"
    }

    fn display_name(&self) -> &'static str {
        "Eye"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails_per_side", "Nails per Side", 24.0, 2.0, 100.0),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![vec![("nails_per_side", Value::Number(48.0))]]
    }

    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup> {
        let frame = CanvasFrame::new(size);
        let n = Self::nails_per_side(config);
        let half = frame.radius;
        let corners = [
            Point::new(frame.center.x - half, frame.center.y - half),
            Point::new(frame.center.x + half, frame.center.y - half),
            Point::new(frame.center.x + half, frame.center.y + half),
            Point::new(frame.center.x - half, frame.center.y + half),
        ];

        (0..4)
            .map(|side| {
                let mut group = NailsGroup::new(format!("side-{}", side + 1));
                edge_nails(&mut group, corners[side], corners[(side + 1) % 4], n);
                group
            })
            .collect()
    }

    fn step_count(&self, config: &Config, _size: Size) -> usize {
        4 * Self::nails_per_side(config)
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let n = Self::nails_per_side(config);
        // Round-robin over the four sides so the eye deepens evenly.
        let i = index / 4;
        let side = index % 4;
        let from = layout.point(side * n + i);
        let to = layout.point(((side + 1) % 4) * n + i);
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
    fn four_sides_no_doubled_corners() {
        let eye = Eye;
        let config = Config::from_schema(eye.schema());
        let size = Size::square(100.0);

        let groups = eye.layout_nails(&config, size);
        assert_eq!(groups.len(), 4);
        let total: usize = groups.iter().map(NailsGroup::len).sum();
        assert_eq!(total, 4 * 24);

        // Edges share corners; each corner must appear exactly once.
        let layout = NailLayout::from_groups(groups);
        for a in 0..layout.nail_count() {
            for b in (a + 1)..layout.nail_count() {
                assert_ne!(layout.point(a), layout.point(b), "duplicate nail at {a} and {b}");
            }
        }
    }

    #[test]
    fn strings_join_matching_indices_on_adjacent_sides() {
        let eye = Eye;
        let mut config = Config::from_schema(eye.schema());
        config.set("nails_per_side", Value::Number(3.0));
        let size = Size::square(100.0);
        let layout = NailLayout::from_groups(eye.layout_nails(&config, size));

        let line = eye.string_at(&layout, &config, size, 5);
        // index 5: i = 1, side = 1.
        assert_eq!(line.start(), layout.point(3 + 1));
        assert_eq!(line.end(), layout.point(6 + 1));
    }
}
