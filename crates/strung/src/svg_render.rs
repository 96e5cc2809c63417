//! SVG drawing backend.
//!
//! Accumulates render calls into retained state (string paths, nail layers,
//! instruction overlay) and assembles an `svg::Document` on demand. Strings
//! that arrive as `line_to` continuations are kept as one polyline path so
//! the output stays compact for long chained patterns.

use svg::Document;
use svg::node::element::{Circle, Group, Line as SvgLine, Polyline, Rectangle, Text};

use crate::geometry::{Point, Size};
use crate::nails::{Nail, NailRenderOptions};
use crate::renderer::Renderer;

#[derive(Debug, Clone)]
struct NailLayer {
    label: Option<String>,
    nails: Vec<Nail>,
    options: NailRenderOptions,
}

/// Production backend that renders to an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: Size,
    background: Option<String>,
    line_width: f64,
    string_color: String,
    paths: Vec<Vec<Point>>,
    nail_layers: Vec<NailLayer>,
    instruction: Option<String>,
}

impl SvgRenderer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            line_width: 1.0,
            string_color: "#1a1a1a".to_string(),
            paths: Vec::new(),
            nail_layers: Vec::new(),
            instruction: None,
        }
    }

    /// Stroke color for strings. Applies to the whole document.
    pub fn set_string_color(&mut self, color: &str) {
        self.string_color = color.to_string();
    }

    /// Assemble the current surface into an SVG document.
    pub fn document(&self) -> Document {
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, self.size.width, self.size.height))
            .set("width", self.size.width)
            .set("height", self.size.height);

        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", self.size.width)
                    .set("height", self.size.height)
                    .set("fill", background.as_str()),
            );
        }

        let mut strings = Group::new()
            .set("stroke", self.string_color.as_str())
            .set("stroke-width", self.line_width)
            .set("fill", "none");
        for path in &self.paths {
            match path.as_slice() {
                [] | [_] => {}
                [from, to] => {
                    strings = strings.add(
                        SvgLine::new()
                            .set("x1", from.x)
                            .set("y1", from.y)
                            .set("x2", to.x)
                            .set("y2", to.y),
                    );
                }
                points => {
                    let joined = points
                        .iter()
                        .map(|p| format!("{},{}", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    strings = strings.add(Polyline::new().set("points", joined));
                }
            }
        }
        document = document.add(strings);

        for layer in &self.nail_layers {
            let mut group = Group::new().set("fill", layer.options.color.as_str());
            if let Some(label) = &layer.label {
                group = group.set("data-group", label.as_str());
            }
            for nail in &layer.nails {
                group = group.add(
                    Circle::new()
                        .set("cx", nail.at.x)
                        .set("cy", nail.at.y)
                        .set("r", layer.options.radius),
                );
                if layer.options.show_numbers {
                    group = group.add(
                        Text::new(nail.number.to_string())
                            .set("x", nail.at.x + layer.options.radius * 2.0)
                            .set("y", nail.at.y - layer.options.radius * 2.0)
                            .set("font-size", layer.options.radius * 4.0),
                    );
                }
            }
            document = document.add(group);
        }

        if let Some(instruction) = &self.instruction {
            document = document.add(
                Text::new(instruction.as_str())
                    .set("x", self.size.width / 2.0)
                    .set("y", self.size.height - 10.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 14.0)
                    .set("fill", "#222222"),
            );
        }

        document
    }

    /// The document serialized to SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }
}

impl Renderer for SvgRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn render_line(&mut self, from: Point, to: Point) {
        self.paths.push(vec![from, to]);
    }

    fn line_to(&mut self, to: Point) {
        match self.paths.last_mut() {
            Some(path) => path.push(to),
            // line_to with no path yet degenerates to a point; it will be
            // skipped at assembly time.
            None => self.paths.push(vec![to]),
        }
    }

    fn render_nails(&mut self, nails: &[Nail], options: &NailRenderOptions) {
        self.nail_layers.push(NailLayer {
            label: None,
            nails: nails.to_vec(),
            options: options.clone(),
        });
    }

    fn render_nails_group(&mut self, group: &crate::nails::NailsGroup, options: &NailRenderOptions) {
        self.nail_layers.push(NailLayer {
            label: Some(group.name().to_string()),
            nails: group.nails().to_vec(),
            options: options.clone(),
        });
    }

    fn reset_strings(&mut self) {
        self.paths.clear();
    }

    fn reset_nails(&mut self) {
        self.nail_layers.clear();
    }

    fn show_instruction(&mut self, text: &str) {
        self.instruction = Some(text.to_string());
    }

    fn clear_instruction(&mut self) {
        self.instruction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nails::NailsGroup;

    #[test]
    fn two_point_path_emits_line_element() {
        let mut renderer = SvgRenderer::new(Size::square(100.0));
        renderer.render_line(Point::new(0.0, 0.0), Point::new(50.0, 50.0));

        let markup = renderer.to_svg_string();
        assert!(markup.contains("<line"), "expected a line element: {markup}");
        assert!(!markup.contains("<polyline"));
    }

    #[test]
    fn chained_path_emits_polyline() {
        let mut renderer = SvgRenderer::new(Size::square(100.0));
        renderer.render_line(Point::new(0.0, 0.0), Point::new(50.0, 0.0));
        renderer.line_to(Point::new(50.0, 50.0));

        let markup = renderer.to_svg_string();
        assert!(markup.contains("<polyline"), "expected a polyline: {markup}");
    }

    #[test]
    fn background_and_nails_round_trip() {
        let mut group = NailsGroup::new("ring");
        group.add(Point::new(10.0, 10.0));

        let mut renderer = SvgRenderer::new(Size::new(200.0, 100.0));
        renderer.set_background("#ffffff");
        renderer.render_nails_group(&group, &NailRenderOptions::default());

        let markup = renderer.to_svg_string();
        assert!(markup.contains("<rect"));
        assert!(markup.contains("<circle"));
        assert!(markup.contains("data-group=\"ring\""));
    }

    #[test]
    fn reset_strings_keeps_nails() {
        let mut group = NailsGroup::new("ring");
        group.add(Point::new(10.0, 10.0));

        let mut renderer = SvgRenderer::new(Size::square(100.0));
        renderer.render_nails_group(&group, &NailRenderOptions::default());
        renderer.render_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        renderer.reset_strings();

        let markup = renderer.to_svg_string();
        assert!(!markup.contains("<line "));
        assert!(markup.contains("<circle"));
    }

    #[test]
    fn instruction_overlay() {
        let mut renderer = SvgRenderer::new(Size::square(100.0));
        renderer.show_instruction("string 4 of 120");
        assert!(renderer.to_svg_string().contains("string 4 of 120"));

        renderer.clear_instruction();
        assert!(!renderer.to_svg_string().contains("string 4 of 120"));
    }
}
