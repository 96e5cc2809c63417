//! Wave pattern: two horizontal rails of nails with shifted cross strings.
//! The only built-in pattern with a non-square preferred canvas.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Point, Size};
use crate::nails::NailsGroup;
use crate::pattern::{ConfigPatch, NailLayout, PatternAlgorithm};
use crate::patterns::util::{CanvasFrame, segment_nails};

#[derive(Debug, Clone, Default)]
pub struct Wave;

impl Wave {
    fn nails(config: &Config) -> usize {
        config.count("nails").max(4)
    }
}

impl PatternAlgorithm for Wave {
    fn id(&self) -> &'static str {
        "wave"
    }

    fn display_name(&self) -> &'static str {
        "Wave"
    }

    fn schema(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::number("nails", "Nails per Rail", 60.0, 4.0, 300.0),
            OptionSpec::number("shift", "Shift", 12.0, 1.0, 100.0),
            OptionSpec::number("height_ratio", "Height Ratio", 0.5, 0.2, 1.0),
            OptionSpec::color("nail_color", "Nail Color", "#444444"),
        ]
    }

    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        vec![vec![
            ("shift", Value::Number(30.0)),
            ("height_ratio", Value::Number(1.0)),
        ]]
    }

    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup> {
        let frame = CanvasFrame::new(size);
        let n = Self::nails(config);

        let mut top = NailsGroup::new("top-rail");
        segment_nails(
            &mut top,
            Point::new(frame.min_x, frame.min_y),
            Point::new(frame.max_x, frame.min_y),
            n,
        );

        let mut bottom = NailsGroup::new("bottom-rail");
        segment_nails(
            &mut bottom,
            Point::new(frame.min_x, frame.max_y),
            Point::new(frame.max_x, frame.max_y),
            n,
        );

        vec![top, bottom]
    }

    fn step_count(&self, config: &Config, _size: Size) -> usize {
        Self::nails(config)
    }

    fn aspect_ratio(&self, config: &Config) -> f64 {
        let ratio = config.number("height_ratio");
        if ratio.is_finite() && ratio > 0.0 {
            1.0 / ratio
        } else {
            2.0
        }
    }

    fn string_at(&self, layout: &NailLayout, config: &Config, _size: Size, index: usize) -> Line {
        let n = Self::nails(config);
        let shift = config.count("shift").max(1);
        let from = layout.point(n + index);
        let to = layout.point((index + shift) % n);
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
    fn wide_canvas_by_default() {
        let wave = Wave;
        let config = Config::from_schema(wave.schema());
        assert_eq!(wave.aspect_ratio(&config), 2.0);
    }

    #[test]
    fn shift_wraps_around_the_top_rail() {
        let wave = Wave;
        let mut config = Config::from_schema(wave.schema());
        config.set("nails", Value::Number(10.0));
        config.set("shift", Value::Number(3.0));
        let size = Size::new(200.0, 100.0);
        let layout = NailLayout::from_groups(wave.layout_nails(&config, size));

        let line = wave.string_at(&layout, &config, size, 8);
        assert_eq!(line.start(), layout.point(10 + 8));
        assert_eq!(line.end(), layout.point(1), "8 + 3 mod 10");
    }

    #[test]
    fn rails_span_the_frame() {
        let wave = Wave;
        let config = Config::from_schema(wave.schema());
        let size = Size::new(200.0, 100.0);
        let frame = CanvasFrame::new(size);

        let groups = wave.layout_nails(&config, size);
        let top = &groups[0];
        assert_eq!(top.nails()[0].at.x, frame.min_x);
        assert_eq!(top.nails()[top.len() - 1].at.x, frame.max_x);
    }
}
