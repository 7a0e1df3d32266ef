use super::*;
use common::shapes::Point;
use tracing::debug;

impl QuadNode {
    /// Removes the first stored point equal to `point`.
    pub(crate) fn delete(&mut self, point: &Point, config: &Config) -> bool {
        if !self.boundary.contains(point) {
            return false;
        }
        self.remove(point, config)
    }

    /// Removal for a point this node has accepted. Internal nodes collapse
    /// sparse children on the way back up.
    fn remove(&mut self, point: &Point, config: &Config) -> bool {
        let center = self.boundary.center();
        let children = match &mut self.state {
            NodeState::Leaf(points) => {
                return match points.iter().position(|p| p == point) {
                    Some(index) => {
                        points.remove(index);
                        true
                    }
                    None => false,
                };
            }
            NodeState::Internal(children) => children,
        };

        let mut removed = false;
        for child in children.iter_mut() {
            if child.delete(point, config) {
                removed = true;
                break;
            }
        }
        // Points that missed every child on insert were routed by center.
        if !removed && !children.iter().any(|child| child.boundary.contains(point)) {
            removed = children[Quadrant::of(&center, point).index()].remove(point, config);
        }
        if !removed {
            return false;
        }

        self.try_merge(config);
        true
    }

    /// Collapses four leaf children back into this node when they hold no
    /// more than `node_capacity` points between them.
    fn try_merge(&mut self, config: &Config) {
        let NodeState::Internal(children) = &self.state else {
            return;
        };
        let mut total = 0;
        for child in children.iter() {
            match child.leaf_len() {
                Some(len) => total += len,
                None => return,
            }
        }
        if total > config.node_capacity {
            return;
        }

        let mut merged = LeafPoints::with_capacity(total);
        if let NodeState::Internal(children) =
            std::mem::replace(&mut self.state, NodeState::Leaf(LeafPoints::new()))
        {
            let children: [QuadNode; 4] = *children;
            for child in children {
                if let NodeState::Leaf(points) = child.state {
                    merged.extend(points);
                }
            }
        }
        debug!(depth = self.depth, points = total, "merging children");
        self.state = NodeState::Leaf(merged);
    }
}
