//! Renderer abstraction: the capability set a pattern drives.
//!
//! Patterns never know which backend they are talking to. The production
//! backend lives in [`crate::svg_render`]; this module holds the trait plus
//! two measurement backends: a recording double that captures the exact call
//! sequence for tests, and a counting double that tallies work with O(1)
//! memory per call so step/nail counts can be derived without storing any
//! geometry.

use crate::geometry::{Line, Point, Size};
use crate::nails::{Nail, NailRenderOptions, NailsGroup};

/// Capability set a pattern drives during a draw pass.
///
/// Backends are interchangeable; the engine performs no validation of render
/// calls and assumes a conforming backend.
pub trait Renderer {
    fn size(&self) -> Size;
    fn set_size(&mut self, size: Size);

    fn set_background(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Draw one string between two nails.
    fn render_line(&mut self, from: Point, to: Point);

    /// Continue a string from the last rendered point, polyline-style.
    fn line_to(&mut self, to: Point);

    fn render_nails(&mut self, nails: &[Nail], options: &NailRenderOptions);

    /// Render a whole group in one batched call so the backend can style it.
    fn render_nails_group(&mut self, group: &NailsGroup, options: &NailRenderOptions) {
        self.render_nails(group.nails(), options);
    }

    fn reset_strings(&mut self);
    fn reset_nails(&mut self);

    fn clear(&mut self) {
        self.reset_strings();
        self.reset_nails();
    }

    /// Instruction-overlay hooks; backends without an overlay ignore them.
    fn show_instruction(&mut self, _text: &str) {}
    fn clear_instruction(&mut self) {}
}

/// One recorded render call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    SetSize(Size),
    SetBackground(String),
    SetLineWidth(f64),
    Line(Line),
    LineTo(Point),
    Nails { group: Option<String>, count: usize },
    ResetStrings,
    ResetNails,
}

/// Test double that records every call it receives.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    size: Size,
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    /// The raw call sequence, in order.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Materialize the strings currently on the surface, resolving
    /// `line_to` continuations and honoring resets.
    pub fn segments(&self) -> Vec<Line> {
        let mut segments = Vec::new();
        let mut cursor: Option<Point> = None;

        for call in &self.calls {
            match call {
                RenderCall::Line(line) => {
                    segments.push(*line);
                    cursor = Some(line.end());
                }
                RenderCall::LineTo(to) => {
                    if let Some(from) = cursor {
                        segments.push(Line::between(from, *to));
                    }
                    cursor = Some(*to);
                }
                RenderCall::ResetStrings => {
                    segments.clear();
                    cursor = None;
                }
                _ => {}
            }
        }

        segments
    }

    /// Nails currently on the surface (sum since the last nail reset).
    pub fn nails_rendered(&self) -> usize {
        let mut total = 0;
        for call in &self.calls {
            match call {
                RenderCall::Nails { count, .. } => total += count,
                RenderCall::ResetNails => total = 0,
                _ => {}
            }
        }
        total
    }
}

impl Renderer for RecordingRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.calls.push(RenderCall::SetSize(size));
    }

    fn set_background(&mut self, color: &str) {
        self.calls.push(RenderCall::SetBackground(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(RenderCall::SetLineWidth(width));
    }

    fn render_line(&mut self, from: Point, to: Point) {
        self.calls.push(RenderCall::Line(Line::between(from, to)));
    }

    fn line_to(&mut self, to: Point) {
        self.calls.push(RenderCall::LineTo(to));
    }

    fn render_nails(&mut self, nails: &[Nail], _options: &NailRenderOptions) {
        self.calls.push(RenderCall::Nails {
            group: None,
            count: nails.len(),
        });
    }

    fn render_nails_group(&mut self, group: &NailsGroup, _options: &NailRenderOptions) {
        self.calls.push(RenderCall::Nails {
            group: Some(group.name().to_string()),
            count: group.len(),
        });
    }

    fn reset_strings(&mut self) {
        self.calls.push(RenderCall::ResetStrings);
    }

    fn reset_nails(&mut self) {
        self.calls.push(RenderCall::ResetNails);
    }
}

/// Measurement double: counts strings and nails, stores nothing else.
///
/// Layouts never emit the same nail twice, so summing batch sizes equals the
/// number of distinct nails rendered.
#[derive(Debug, Clone)]
pub struct CountingRenderer {
    size: Size,
    strings: usize,
    nails: usize,
}

impl CountingRenderer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            strings: 0,
            nails: 0,
        }
    }

    pub fn strings(&self) -> usize {
        self.strings
    }

    pub fn nails(&self) -> usize {
        self.nails
    }
}

impl Renderer for CountingRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn set_background(&mut self, _color: &str) {}

    fn set_line_width(&mut self, _width: f64) {}

    fn render_line(&mut self, _from: Point, _to: Point) {
        self.strings += 1;
    }

    fn line_to(&mut self, _to: Point) {
        self.strings += 1;
    }

    fn render_nails(&mut self, nails: &[Nail], _options: &NailRenderOptions) {
        self.nails += nails.len();
    }

    fn reset_strings(&mut self) {
        self.strings = 0;
    }

    fn reset_nails(&mut self) {
        self.nails = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_materializes_line_to_chains() {
        let mut renderer = RecordingRenderer::new(Size::square(100.0));
        renderer.render_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        renderer.line_to(Point::new(10.0, 10.0));
        renderer.line_to(Point::new(0.0, 10.0));

        let segments = renderer.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Line::new(10.0, 0.0, 10.0, 10.0));
        assert_eq!(segments[2], Line::new(10.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn recording_reset_strings_clears_segments() {
        let mut renderer = RecordingRenderer::new(Size::square(100.0));
        renderer.render_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        renderer.reset_strings();
        renderer.render_line(Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        assert_eq!(renderer.segments().len(), 1);
        // The raw call log still holds everything.
        assert_eq!(renderer.calls().len(), 3);
    }

    #[test]
    fn recording_tracks_nail_groups() {
        let mut group = NailsGroup::new("ring");
        group.add(Point::new(0.0, 0.0));
        group.add(Point::new(1.0, 0.0));

        let mut renderer = RecordingRenderer::new(Size::square(100.0));
        renderer.render_nails_group(&group, &NailRenderOptions::default());

        assert_eq!(renderer.nails_rendered(), 2);
        assert_eq!(
            renderer.calls()[0],
            RenderCall::Nails {
                group: Some("ring".to_string()),
                count: 2
            }
        );
    }

    #[test]
    fn counting_tallies_strings_and_nails() {
        let mut group = NailsGroup::new("ring");
        for i in 0..5 {
            group.add(Point::new(i as f64, 0.0));
        }

        let mut renderer = CountingRenderer::new(Size::square(100.0));
        renderer.render_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        renderer.line_to(Point::new(2.0, 2.0));
        renderer.render_nails_group(&group, &NailRenderOptions::default());

        assert_eq!(renderer.strings(), 2);
        assert_eq!(renderer.nails(), 5);

        renderer.clear();
        assert_eq!(renderer.strings(), 0);
        assert_eq!(renderer.nails(), 0);
    }
}
