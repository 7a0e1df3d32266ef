use super::*;
use crate::error::InvariantViolation;
use common::shapes::{Point, Rectangle};
use std::fmt;

/// How a node was reached from its parent, for the containment check.
#[derive(Clone, Copy)]
struct Slot {
    parent_center: Point,
    quadrant: Quadrant,
}

#[derive(Clone, Copy)]
struct PathEntry {
    boundary: Rectangle,
    reach: RectExtent,
    slot: Option<Slot>,
    depth: usize,
}

impl QuadNode {
    /// Checks containment, capacity and merge invariants below this node and
    /// returns the number of points it stores.
    pub(crate) fn validate(&self, config: &Config) -> Result<usize, InvariantViolation> {
        let mut path = Vec::with_capacity(self.depth_below() + 1);
        self.validate_in(None, &mut path, config)
    }

    fn validate_in(
        &self,
        slot: Option<Slot>,
        path: &mut Vec<PathEntry>,
        config: &Config,
    ) -> Result<usize, InvariantViolation> {
        path.push(PathEntry {
            boundary: self.boundary,
            reach: self.reach,
            slot,
            depth: self.depth,
        });
        let result = match &self.state {
            NodeState::Leaf(points) => {
                if points.len() > config.node_capacity && self.depth < config.max_depth {
                    Err(InvariantViolation::LeafOverCapacity {
                        depth: self.depth,
                        len: points.len(),
                        capacity: config.node_capacity,
                    })
                } else {
                    points
                        .iter()
                        .try_for_each(|point| check_path(point, path.as_slice()))
                        .map(|_| points.len())
                }
            }
            NodeState::Internal(children) => {
                let center = self.boundary.center();
                let mut total = 0;
                let mut leaf_total = Some(0);
                for (child, quadrant) in children.iter().zip(Quadrant::ALL) {
                    let slot = Slot {
                        parent_center: center,
                        quadrant,
                    };
                    total += child.validate_in(Some(slot), path, config)?;
                    leaf_total = leaf_total.zip(child.leaf_len()).map(|(a, b)| a + b);
                }
                match leaf_total {
                    Some(total) if total <= config.node_capacity => {
                        Err(InvariantViolation::NeedlessSplit {
                            depth: self.depth,
                            total,
                            capacity: config.node_capacity,
                        })
                    }
                    _ => Ok(total),
                }
            }
        };
        path.pop();
        result
    }

    /// Number of levels under this node, zero for a leaf.
    pub(crate) fn depth_below(&self) -> usize {
        match &self.state {
            NodeState::Leaf(_) => 0,
            NodeState::Internal(children) => {
                1 + children.iter().map(|c| c.depth_below()).max().unwrap_or(0)
            }
        }
    }

    pub(crate) fn node_boundaries(&self, out: &mut Vec<Rectangle>) {
        out.push(self.boundary);
        if let NodeState::Internal(children) = &self.state {
            for child in children.iter() {
                child.node_boundaries(out);
            }
        }
    }

    pub(crate) fn points(&self, out: &mut Vec<Point>) {
        match &self.state {
            NodeState::Leaf(points) => out.extend_from_slice(points),
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.points(out);
                }
            }
        }
    }

    /// Returns `(nodes, leaves)` in this subtree.
    pub(crate) fn node_counts(&self) -> (usize, usize) {
        match &self.state {
            NodeState::Leaf(_) => (1, 1),
            NodeState::Internal(children) => {
                children.iter().fold((1, 0), |(nodes, leaves), child| {
                    let (n, l) = child.node_counts();
                    (nodes + n, leaves + l)
                })
            }
        }
    }

    /// Pre-order dump: boundary and local points, then each child indented.
    pub(crate) fn dump(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "  ".repeat(level);
        match &self.state {
            NodeState::Leaf(points) => {
                writeln!(f, "{indent}Node {} | points={}", self.boundary, points.len())?;
                for point in points.iter() {
                    writeln!(f, "{indent}  {point}")?;
                }
            }
            NodeState::Internal(children) => {
                writeln!(f, "{indent}Node {} | points=0", self.boundary)?;
                for (child, quadrant) in children.iter().zip(Quadrant::ALL) {
                    writeln!(f, "{indent}  [{}]", quadrant.label())?;
                    child.dump(f, level + 2)?;
                }
            }
        }
        Ok(())
    }
}

/// A point must sit inside every node on its path, or have been routed into
/// a node by its parent's center after missing all of the parent's children.
/// Either way every node on the path must reach it, or queries skip it.
fn check_path(point: &Point, path: &[PathEntry]) -> Result<(), InvariantViolation> {
    for entry in path {
        let routed = entry
            .slot
            .is_some_and(|slot| Quadrant::of(&slot.parent_center, point) == slot.quadrant);
        if !entry.boundary.contains(point) && !routed {
            return Err(InvariantViolation::PointOutsideBoundary {
                point: *point,
                boundary: entry.boundary,
                depth: entry.depth,
            });
        }
        if !entry.reach.contains(point) {
            return Err(InvariantViolation::PointOutsideReach {
                point: *point,
                depth: entry.depth,
            });
        }
    }
    Ok(())
}
