use super::*;
use common::shapes::Point;
use tracing::{debug, warn};

impl QuadNode {
    /// Inserts `point` if this node's boundary contains it.
    pub(crate) fn insert(&mut self, point: Point, config: &Config) -> bool {
        if !self.boundary.contains(&point) {
            return false;
        }
        self.place(point, config);
        true
    }

    /// Stores a point this node has already accepted, splitting a full leaf.
    fn place(&mut self, point: Point, config: &Config) {
        self.reach.include(&point);
        if let NodeState::Leaf(points) = &mut self.state {
            if points.len() < config.node_capacity {
                points.push(point);
                return;
            }
            if self.depth >= config.max_depth {
                if points.len() == config.node_capacity {
                    warn!(
                        depth = self.depth,
                        capacity = config.node_capacity,
                        "leaf at max depth growing past capacity"
                    );
                }
                points.push(point);
                return;
            }
            let points = std::mem::take(points);
            self.subdivide(points, config);
        }

        let center = self.boundary.center();
        if let NodeState::Internal(children) = &mut self.state {
            place_in_children(children, &center, point, config);
        }
    }

    /// Turns this leaf into an internal node and redistributes `points`.
    fn subdivide(&mut self, points: LeafPoints, config: &Config) {
        debug!(
            depth = self.depth,
            points = points.len(),
            "subdividing node"
        );
        let center = self.boundary.center();
        let mut children = self.new_children();
        for point in points {
            place_in_children(&mut children, &center, point, config);
        }
        self.state = NodeState::Internal(children);
    }
}

/// First child that accepts the point wins, in NW, NE, SW, SE order.
///
/// Child edges are computed from the parent's center and half-extents, so a
/// point on the parent's outer edge can fall outside every child by rounding.
/// Such a point goes to the quadrant picked by comparing it with `center`,
/// and that child's reach grows to cover it.
fn place_in_children(
    children: &mut [QuadNode; 4],
    center: &Point,
    point: Point,
    config: &Config,
) {
    for child in children.iter_mut() {
        if child.insert(point, config) {
            return;
        }
    }
    let quadrant = Quadrant::of(center, &point);
    warn!(
        x = point.x,
        y = point.y,
        quadrant = quadrant.label(),
        "point rejected by every child, routing by center"
    );
    children[quadrant.index()].place(point, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Rectangle;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn leaf(points: &[(f64, f64)]) -> QuadNode {
        let mut node = QuadNode::new_leaf(Rectangle::new(0.0, 0.0, 8.0, 8.0), 0);
        let config = Config::default();
        for &(x, y) in points {
            assert!(node.insert(Point::new(x, y), &config));
        }
        node
    }

    #[test]
    fn fills_leaf_up_to_capacity() {
        let node = leaf(&[(1.0, 1.0), (2.0, 5.0), (-4.0, 3.0), (6.0, -2.0)]);
        assert_eq!(node.leaf_len(), Some(4));
    }

    #[test]
    fn overflow_splits_and_keeps_every_point() {
        let node = leaf(&[(1.0, 1.0), (2.0, 5.0), (-4.0, 3.0), (6.0, -2.0), (3.0, 3.0)]);
        let NodeState::Internal(children) = &node.state else {
            panic!("expected internal node after overflow");
        };
        let counts: Vec<_> = children.iter().map(|c| c.leaf_len()).collect();
        assert_eq!(counts, vec![Some(1), Some(3), Some(0), Some(1)]);
    }

    #[test]
    fn center_point_goes_north_west() {
        let node = leaf(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]);
        let NodeState::Internal(children) = &node.state else {
            panic!("expected internal node after overflow");
        };
        assert_eq!(children[Quadrant::NorthWest.index()].leaf_len(), Some(4));
        assert_eq!(children[Quadrant::NorthEast.index()].leaf_len(), Some(1));
    }

    #[test]
    fn rejects_point_outside_boundary() {
        let mut node = leaf(&[]);
        assert!(!node.insert(Point::new(8.5, 0.0), &Config::default()));
        assert_eq!(node.leaf_len(), Some(0));
    }

    /// Searches seeded non-dyadic boundaries for a corner that none of the
    /// quadrants contains once their edges are rounded.
    fn boundary_with_stray_corner() -> (Rectangle, Point) {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let boundary = Rectangle::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(0.1..100.0),
                rng.gen_range(0.1..100.0),
            );
            let quadrants = boundary.quadrants();
            for corner in [
                Point::new(boundary.min_x(), boundary.max_y()),
                Point::new(boundary.max_x(), boundary.max_y()),
                Point::new(boundary.min_x(), boundary.min_y()),
                Point::new(boundary.max_x(), boundary.min_y()),
            ] {
                if !quadrants.iter().any(|q| q.contains(&corner)) {
                    return (boundary, corner);
                }
            }
        }
        panic!("no stray corner found");
    }

    #[test]
    fn stray_point_is_routed_by_center() {
        let (boundary, stray) = boundary_with_stray_corner();
        let config = Config::with_node_capacity(1);
        let mut node = QuadNode::new_leaf(boundary, 0);
        assert!(node.insert(boundary.center(), &config));
        assert!(node.insert(stray, &config));

        let NodeState::Internal(children) = &node.state else {
            panic!("expected internal node after overflow");
        };
        let quadrant = Quadrant::of(&boundary.center(), &stray);
        let child = &children[quadrant.index()];
        assert!(!child.boundary.contains(&stray));
        assert!(child.reach.contains(&stray));
        assert!(node.reach.contains(&stray));

        let mut found = Vec::new();
        let at_stray = Rectangle::new(stray.x, stray.y, 0.0, 0.0);
        node.query_range_with(&at_stray, &mut |p| found.push(p));
        assert_eq!(found, vec![stray]);
    }
}
