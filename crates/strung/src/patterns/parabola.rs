//! Parabola pattern: curve stitching across two perpendicular axes. Nail
//! `i` on one axis connects to nail `i` on the other, and the envelope of
//! those chords traces a parabola. An optional mirrored axis stitches a
//! second curve into the opposite corner.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Point, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::{CanvasFrame, edge_nails};

#[derive(Debug, Clone, Default)]
pub struct Parabola;

impl Parabola {
    fn nails_per_axis(config: &Config) -> usize {
        config.count("nails_per_axis").max(2)
    }
}

impl PatternAlgorithm for Parabola {
    fn id(&self) -> &'static str {
        "parabola"
    }

    fn display_name(&self) -> &'static str {
        "Parabola"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails_per_axis", "Nails per Axis", 30.0, 2.0, 200.0),
            OptionSpec::flag("mirror", "Mirror", false),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![vec![("mirror", Value::Bool(true))]]
    }

    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup> {
        let frame = CanvasFrame::new(size);
        let n = Self::nails_per_axis(config);

        let bottom_left = Point::new(frame.min_x, frame.max_y);
        let top_left = Point::new(frame.min_x, frame.min_y);
        let bottom_right = Point::new(frame.max_x, frame.max_y);
        let top_right = Point::new(frame.max_x, frame.min_y);

        let mut left = NailsGroup::new("left-axis");
        edge_nails(&mut left, bottom_left, top_left, n);

        // Indexed from the right so nail i sits i steps from the corner the
        // curve bends around.
        let mut bottom = NailsGroup::new("bottom-axis");
        edge_nails(&mut bottom, bottom_right, bottom_left, n);

        let mut groups = vec![left, bottom];
        if config.flag("mirror") {
            let mut right = NailsGroup::new("right-axis");
            edge_nails(&mut right, top_right, bottom_right, n);
            groups.push(right);
        }
        groups
    }

    fn step_count(&self, config: &Config, _size: Size) -> usize {
        let curves = if config.flag("mirror") { 2 } else { 1 };
        curves * Self::nails_per_axis(config)
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let n = Self::nails_per_axis(config);
        if index < n {
            // Left axis to bottom axis.
            Line::between(layout.point(index), layout.point(n + index))
        } else {
            // Mirrored curve: right axis to bottom axis, reversed so the
            // second envelope bends around the opposite corner.
            let i = index - n;
            Line::between(layout.point(2 * n + i), layout.point(n + (n - 1 - i)))
        }
    }

    fn clone_box(&self) -> Box<dyn PatternAlgorithm> {
        Box::new(self.clone())
    }
}
