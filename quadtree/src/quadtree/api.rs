use super::*;
use crate::error::{InvariantViolation, QuadtreeError, QuadtreeResult};
use common::shapes::{Point, Rectangle};
use std::fmt;
use tracing::trace;

impl QuadTree {
    pub fn new_with_config(boundary: Rectangle, config: Config) -> QuadtreeResult<Self> {
        if !boundary.is_valid() {
            return Err(QuadtreeError::invalid_boundary(&boundary));
        }
        config.validate()?;
        Ok(Self {
            root: QuadNode::new_leaf(boundary, 0),
            config,
            len: 0,
        })
    }

    pub fn new(boundary: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(boundary, Config::default())
    }

    /// Stores `point`. Returns false, leaving the tree untouched, when the
    /// point lies outside the tree's boundary. Duplicates are kept.
    pub fn insert(&mut self, point: Point) -> bool {
        let inserted = self.root.insert(point, &self.config);
        if inserted {
            self.len += 1;
        }
        trace!(x = point.x, y = point.y, inserted, "insert");
        inserted
    }

    /// Inserts every point and returns how many were accepted.
    pub fn insert_batch<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .filter(|&point| self.insert(point))
            .count()
    }

    /// Removes one stored point with exactly these coordinates.
    pub fn delete(&mut self, point: Point) -> bool {
        let deleted = self.root.delete(&point, &self.config);
        if deleted {
            self.len -= 1;
        }
        trace!(x = point.x, y = point.y, deleted, "delete");
        deleted
    }

    pub fn query_range(&self, range: &Rectangle) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_range_into(range, &mut found);
        found
    }

    /// Appends matches to `found` without clearing it.
    pub fn query_range_into(&self, range: &Rectangle, found: &mut Vec<Point>) {
        self.root.query_range_with(range, &mut |point| found.push(point));
    }

    pub fn query_range_with<F>(&self, range: &Rectangle, mut f: F)
    where
        F: FnMut(Point),
    {
        self.root.query_range_with(range, &mut f);
    }

    pub fn count_in_range(&self, range: &Rectangle) -> usize {
        let mut count = 0;
        self.root.query_range_with(range, &mut |_| count += 1);
        count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn boundary(&self) -> Rectangle {
        self.root.boundary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops every point and node, keeping the boundary and config.
    pub fn clear(&mut self) {
        self.root = QuadNode::new_leaf(self.root.boundary, 0);
        self.len = 0;
    }

    /// Walks the whole tree and checks its structural invariants.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let actual = self.root.validate(&self.config)?;
        if actual != self.len {
            return Err(InvariantViolation::CountMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }

    /// Pre-order list of every node's boundary, root first.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.root.node_boundaries(bounding_boxes);
    }

    /// Every stored point in NW, NE, SW, SE traversal order.
    pub fn all_points(&self, points: &mut Vec<Point>) {
        self.root.points(points);
    }

    /// Depth of the deepest leaf; the root is depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth_below()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_counts().0
    }

    pub fn leaf_count(&self) -> usize {
        self.root.node_counts().1
    }

    pub fn is_subdivided(&self) -> bool {
        !self.root.is_leaf()
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.dump(f, 0)
    }
}
