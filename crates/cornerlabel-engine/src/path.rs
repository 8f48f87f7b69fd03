//! Polygonal paths.
//!
//! Badges are built from straight segments only, so a path is a flat list of
//! move/line/close verbs. Paths are plain values: a renderer builds a fresh
//! one for every draw instead of appending to a long-lived instance.

use crate::coords::{Affine, Vec2};

/// A single path verb.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    Close,
}

/// An immutable sequence of path verbs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// All explicit points, in verb order.
    pub fn points(&self) -> Vec<Vec2> {
        self.verbs
            .iter()
            .filter_map(|v| match *v {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => Some(p),
                PathVerb::Close => None,
            })
            .collect()
    }

    /// Returns a copy with every point mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: Affine) -> Path {
        let verbs = self
            .verbs
            .iter()
            .map(|v| match *v {
                PathVerb::MoveTo(p) => PathVerb::MoveTo(transform.apply(p)),
                PathVerb::LineTo(p) => PathVerb::LineTo(transform.apply(p)),
                PathVerb::Close => PathVerb::Close,
            })
            .collect();
        Path { verbs }
    }
}

/// Fluent builder for [`Path`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    verbs: Vec<PathVerb>,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { verbs: Vec::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.verbs.push(PathVerb::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.verbs.push(PathVerb::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn build(self) -> Path {
        Path { verbs: self.verbs }
    }
}
