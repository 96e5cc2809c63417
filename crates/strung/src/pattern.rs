//! The pattern contract and its driver.
//!
//! A pattern is a pure function over (config, size, index): the segment at a
//! given step depends only on those three inputs, never on what was drawn
//! before. [`PatternInstance`] exploits that purity to make the sequence
//! lazy, seekable and countable: forward seeks resume from the current
//! position, backward seeks clear the strings and replay from zero, and
//! step counts come from closed-form arithmetic rather than generation.

use crate::config::{Config, OptionSpec, Value};
use crate::geometry::{Line, Point, Size};
use crate::nails::{NailRenderOptions, NailsGroup};
use crate::renderer::Renderer;

/// A partial configuration: option keys with replacement values.
pub type ConfigPatch = Vec<(&'static str, Value)>;

/// One string-art algorithm.
///
/// `string_at` must be pure in (config, size, index). Everything the driver
/// offers (seeking, counting, lazy iteration) rests on that.
pub trait PatternAlgorithm {
    /// Stable identifier used for registry lookup.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// The options this pattern understands.
    fn schema(&self) -> Vec<OptionSpec>;

    /// Named configuration variants beyond the defaults, for galleries and
    /// conformance sweeps.
    fn alternate_configs(&self) -> Vec<ConfigPatch> {
        Vec::new()
    }

    /// Place all nails for the given config and canvas.
    fn layout_nails(&self, config: &Config, size: Size) -> Vec<NailsGroup>;

    /// Total number of strings, computed without generating any.
    fn step_count(&self, config: &Config, size: Size) -> usize;

    /// Total number of nails, computed without generating any.
    fn nail_count(&self, config: &Config, size: Size) -> usize {
        self.layout_nails(config, size)
            .iter()
            .map(NailsGroup::len)
            .sum()
    }

    /// Preferred width/height ratio of the canvas.
    fn aspect_ratio(&self, _config: &Config) -> f64 {
        1.0
    }

    /// Stroke width for strings, in canvas units.
    fn line_width(&self, _config: &Config) -> f64 {
        1.0
    }

    /// The string at step `index`, `0 <= index < step_count`.
    fn string_at(&self, layout: &NailLayout, config: &Config, size: Size, index: usize) -> Line;

    /// Whether the string at `index` starts where the previous one ended, so
    /// the backend can extend a polyline instead of starting a new segment.
    fn continues(&self, _config: &Config, _index: usize) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn PatternAlgorithm>;
}

impl Clone for Box<dyn PatternAlgorithm> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Nail groups flattened into a single indexable point list.
///
/// Patterns address nails by flat index: group boundaries only matter for
/// rendering and labeling.
#[derive(Debug, Clone)]
pub struct NailLayout {
    groups: Vec<NailsGroup>,
    points: Vec<Point>,
}

impl NailLayout {
    pub fn from_groups(groups: Vec<NailsGroup>) -> Self {
        let points = groups
            .iter()
            .flat_map(|group| group.iter().map(|nail| nail.at))
            .collect();
        Self { groups, points }
    }

    pub fn groups(&self) -> &[NailsGroup] {
        &self.groups
    }

    /// Nail position by flat index across all groups.
    ///
    /// Out-of-range indices fall back to the origin; layouts and step counts
    /// are derived from the same config, so a conforming pattern never hits
    /// this.
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        self.points
            .get(index)
            .copied()
            .unwrap_or(Point::new(0.0, 0.0))
    }

    pub fn nail_count(&self) -> usize {
        self.points.len()
    }
}

/// Per-draw options.
#[derive(Debug, Clone, Default)]
pub struct DrawOptions {
    /// Stop after this many strings; `None` draws the full pattern.
    pub position: Option<usize>,
    /// Clear and re-render the nails even if the config is unchanged.
    pub redraw_nails: bool,
    /// Clear the strings and replay from zero.
    pub redraw_strings: bool,
}

/// Where the instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// No layout yet, or config/size changed since the last one.
    Uninitialized,
    /// Nails are placed, no strings drawn.
    Initialized,
    /// Some strings drawn, more remain.
    Generating,
    /// Every string drawn.
    Complete,
}

/// Driver pairing an algorithm with its config, canvas and draw position.
///
/// Single-consumer: one instance drives one renderer at a time. Sharing a
/// pattern across surfaces goes through [`PatternInstance::copy`].
#[derive(Clone)]
pub struct PatternInstance {
    algorithm: Box<dyn PatternAlgorithm>,
    config: Config,
    size: Size,
    layout: Option<NailLayout>,
    step_count: usize,
    position: usize,
    last_drawn: Option<usize>,
    /// Layout/count caches need rebuilding.
    dirty: bool,
    /// The surface has been through `init_draw` since the last change.
    initialized: bool,
}

impl std::fmt::Debug for PatternInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternInstance")
            .field("algorithm", &self.algorithm.id())
            .field("config", &self.config)
            .field("size", &self.size)
            .field("layout", &self.layout)
            .field("step_count", &self.step_count)
            .field("position", &self.position)
            .field("last_drawn", &self.last_drawn)
            .field("dirty", &self.dirty)
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl PatternInstance {
    pub fn new(algorithm: Box<dyn PatternAlgorithm>, size: Size) -> Self {
        let config = Config::from_schema(algorithm.schema());
        Self {
            algorithm,
            config,
            size,
            layout: None,
            step_count: 0,
            position: 0,
            last_drawn: None,
            dirty: true,
            initialized: false,
        }
    }

    pub fn id(&self) -> &'static str {
        self.algorithm.id()
    }

    pub fn display_name(&self) -> &'static str {
        self.algorithm.display_name()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Named configuration variants declared by the algorithm.
    pub fn alternate_configs(&self) -> Vec<ConfigPatch> {
        self.algorithm.alternate_configs()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Strings drawn so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.dirty = true;
        }
    }

    /// Merge a partial config; the next draw re-layouts from scratch.
    pub fn assign_config(&mut self, patch: &[(&str, Value)]) {
        self.config.assign(patch);
        self.dirty = true;
    }

    /// Independent duplicate with the same algorithm, config and size but
    /// its own draw position, detached from any renderer.
    pub fn copy(&self) -> Self {
        Self {
            algorithm: self.algorithm.clone(),
            config: self.config.clone(),
            size: self.size,
            layout: None,
            step_count: 0,
            position: 0,
            last_drawn: None,
            dirty: true,
            initialized: false,
        }
    }

    pub fn state(&self) -> DrawState {
        if self.dirty || !self.initialized {
            DrawState::Uninitialized
        } else if self.position >= self.step_count {
            DrawState::Complete
        } else if self.position == 0 {
            DrawState::Initialized
        } else {
            DrawState::Generating
        }
    }

    /// Total strings for the current config and size.
    pub fn step_count(&mut self) -> usize {
        self.prepare();
        self.step_count
    }

    /// Total nails for the current config and size.
    pub fn nail_count(&mut self) -> usize {
        self.prepare();
        self.layout
            .as_ref()
            .map(NailLayout::nail_count)
            .unwrap_or(0)
    }

    /// Preferred width/height ratio; non-finite or non-positive values from
    /// the algorithm collapse to square.
    pub fn aspect_ratio(&self) -> f64 {
        let ratio = self.algorithm.aspect_ratio(&self.config);
        if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        }
    }

    fn prepare(&mut self) {
        if self.dirty || self.layout.is_none() {
            let groups = self.algorithm.layout_nails(&self.config, self.size);
            self.layout = Some(NailLayout::from_groups(groups));
            self.step_count = self.algorithm.step_count(&self.config, self.size);
            self.position = 0;
            self.last_drawn = None;
            self.dirty = false;
        }
    }

    fn nail_render_options(&self) -> NailRenderOptions {
        let mut options = NailRenderOptions::default();
        if let Some(color) = self.config.get("nail_color").and_then(Value::as_color) {
            options.color = color.to_string();
        }
        options
    }

    fn render_nail_groups(&self, renderer: &mut dyn Renderer) {
        let options = self.nail_render_options();
        if let Some(layout) = &self.layout {
            for group in layout.groups() {
                renderer.render_nails_group(group, &options);
            }
        }
    }

    /// Rebuild the layout, clear the surface and render the nails. Leaves
    /// the position at zero with no strings drawn.
    pub fn init_draw(&mut self, renderer: &mut dyn Renderer) {
        self.dirty = true;
        self.prepare();
        renderer.clear();
        renderer.set_line_width(self.algorithm.line_width(&self.config));
        self.render_nail_groups(renderer);
        self.initialized = true;
    }

    /// Draw up to `options.position` strings (all of them by default).
    ///
    /// Repeating a draw with the same config and target is a no-op on the
    /// surface: nothing is cleared and nothing new is rendered.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, options: &DrawOptions) {
        if self.dirty || !self.initialized {
            self.init_draw(renderer);
        } else {
            if options.redraw_nails {
                renderer.reset_nails();
                self.render_nail_groups(renderer);
            }
            if options.redraw_strings {
                renderer.reset_strings();
                self.position = 0;
                self.last_drawn = None;
            }
        }

        let target = options.position.unwrap_or(self.step_count);
        self.seek(renderer, target.min(self.step_count));
    }

    /// Seek to an absolute position, clamped to `[0, step_count]`.
    ///
    /// Forward seeks resume from the current position; backward seeks clear
    /// the strings and replay from zero.
    pub fn goto(&mut self, renderer: &mut dyn Renderer, target: usize) {
        if self.dirty || !self.initialized {
            self.init_draw(renderer);
        }
        self.seek(renderer, target.min(self.step_count));
    }

    /// Draw the next string. Returns false once the pattern is complete.
    pub fn draw_next(&mut self, renderer: &mut dyn Renderer) -> bool {
        if self.dirty || !self.initialized {
            self.init_draw(renderer);
        }
        if self.position >= self.step_count {
            return false;
        }
        self.render_current(renderer);
        true
    }

    fn seek(&mut self, renderer: &mut dyn Renderer, target: usize) {
        if target < self.position {
            renderer.reset_strings();
            self.position = 0;
            self.last_drawn = None;
        }
        while self.position < target {
            self.render_current(renderer);
        }
    }

    fn render_current(&mut self, renderer: &mut dyn Renderer) {
        let index = self.position;
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let line = self
            .algorithm
            .string_at(layout, &self.config, self.size, index);

        let chains = index > 0
            && self.last_drawn == Some(index - 1)
            && self.algorithm.continues(&self.config, index);
        if chains {
            renderer.line_to(line.end());
        } else {
            renderer.render_line(line.start(), line.end());
        }

        self.last_drawn = Some(index);
        self.position = index + 1;
    }

    /// Lazily iterate the remaining strings without touching a renderer.
    ///
    /// Each pulled element advances the instance position by one; a fresh
    /// invocation after `init_draw` restarts from zero.
    pub fn strings(&mut self) -> Strings<'_> {
        self.prepare();
        Strings {
            algorithm: self.algorithm.as_ref(),
            layout: self.layout.as_ref(),
            config: &self.config,
            size: self.size,
            position: &mut self.position,
            end: self.step_count,
        }
    }
}

/// Lazy iterator over a pattern's strings from its current position.
pub struct Strings<'a> {
    algorithm: &'a dyn PatternAlgorithm,
    layout: Option<&'a NailLayout>,
    config: &'a Config,
    size: Size,
    position: &'a mut usize,
    end: usize,
}

impl Iterator for Strings<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let layout = self.layout?;
        if *self.position >= self.end {
            return None;
        }
        let line = self
            .algorithm
            .string_at(layout, self.config, self.size, *self.position);
        *self.position += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(*self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Strings<'_> {}
