use common::shapes::{Point, Rectangle};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "boundary must be finite with non-negative half-extents (x: {x}, y: {y}, w: {w}, h: {h})"
    )]
    InvalidBoundary { x: f64, y: f64, w: f64, h: f64 },
    #[error("node capacity must be at least 1 (capacity: {capacity})")]
    InvalidNodeCapacity { capacity: usize },
    #[error("max depth must be at most {limit} (max_depth: {max_depth})")]
    InvalidMaxDepth { max_depth: usize, limit: usize },
}

impl QuadtreeError {
    pub(crate) fn invalid_boundary(rect: &Rectangle) -> Self {
        QuadtreeError::InvalidBoundary {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

/// Structural problem reported by `QuadTree::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("point {point} stored outside node boundary ({boundary}) at depth {depth}")]
    PointOutsideBoundary {
        point: Point,
        boundary: Rectangle,
        depth: usize,
    },
    #[error("point {point} at depth {depth} lies outside the node's query reach")]
    PointOutsideReach { point: Point, depth: usize },
    #[error("leaf at depth {depth} holds {len} points (capacity: {capacity})")]
    LeafOverCapacity {
        depth: usize,
        len: usize,
        capacity: usize,
    },
    #[error(
        "internal node at depth {depth} has leaf children holding only {total} points (capacity: {capacity})"
    )]
    NeedlessSplit {
        depth: usize,
        total: usize,
        capacity: usize,
    },
    #[error("tree reports {expected} points but stores {actual}")]
    CountMismatch { expected: usize, actual: usize },
}
