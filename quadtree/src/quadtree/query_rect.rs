use super::*;
use common::shapes::{Point, Rectangle};

impl QuadNode {
    /// Calls `f` for every stored point inside `range`. Subtrees whose
    /// reach misses `range` are skipped.
    pub(crate) fn query_range_with<F>(&self, range: &Rectangle, f: &mut F)
    where
        F: FnMut(Point),
    {
        if !self.reach.intersects(range) {
            return;
        }
        match &self.state {
            NodeState::Leaf(points) => {
                for point in points.iter() {
                    if range.contains(point) {
                        f(*point);
                    }
                }
            }
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.query_range_with(range, f);
                }
            }
        }
    }
}
