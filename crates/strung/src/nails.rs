//! Nails and nail groups.
//!
//! A pattern lays its nails out in one or more named groups (per spoke, per
//! ring, per axis) so a backend can render and style each group with a
//! single batched call.

use crate::geometry::Point;

/// A fixed point on the canvas that strings connect to.
///
/// `number` is the nail's position within its group, used for labeling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nail {
    pub number: usize,
    pub at: Point,
}

impl Nail {
    #[inline]
    pub fn new(number: usize, at: Point) -> Self {
        Self { number, at }
    }
}

/// Ordered, named collection of nails.
///
/// Built incrementally during nail layout, then treated as immutable for the
/// rest of the draw pass; `init_draw` rebuilds groups from scratch.
#[derive(Debug, Clone)]
pub struct NailsGroup {
    name: String,
    nails: Vec<Nail>,
}

impl NailsGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nails: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a nail at the given point, numbering it after the last one.
    pub fn add(&mut self, at: Point) {
        let number = self.nails.len();
        self.nails.push(Nail::new(number, at));
    }

    pub fn nails(&self) -> &[Nail] {
        &self.nails
    }

    pub fn len(&self) -> usize {
        self.nails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nails.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nail> {
        self.nails.iter()
    }
}

/// Styling options a pattern passes along when rendering nails.
#[derive(Debug, Clone, PartialEq)]
pub struct NailRenderOptions {
    /// Nail head radius in canvas units.
    pub radius: f64,
    pub color: String,
    /// Draw nail numbers next to the heads.
    pub show_numbers: bool,
}

impl Default for NailRenderOptions {
    fn default() -> Self {
        Self {
            radius: 1.5,
            color: "#444444".to_string(),
            show_numbers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_numbers_sequentially() {
        let mut group = NailsGroup::new("ring");
        group.add(Point::new(0.0, 0.0));
        group.add(Point::new(1.0, 0.0));
        group.add(Point::new(2.0, 0.0));

        assert_eq!(group.len(), 3);
        let numbers: Vec<usize> = group.iter().map(|n| n.number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn group_keeps_insertion_order() {
        let mut group = NailsGroup::new("axis");
        group.add(Point::new(5.0, 0.0));
        group.add(Point::new(1.0, 0.0));

        assert_eq!(group.nails()[0].at, Point::new(5.0, 0.0));
        assert_eq!(group.nails()[1].at, Point::new(1.0, 0.0));
    }

    #[test]
    fn empty_group() {
        let group = NailsGroup::new("empty");
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }
}
