use common::shapes::{Point, Rectangle};
use smallvec::SmallVec;

/// Inline leaf storage, sized for the default node capacity.
pub(crate) const LEAF_INLINE: usize = 4;

pub(crate) type LeafPoints = SmallVec<[Point; LEAF_INLINE]>;

/// Child slot of an internal node. The discriminant is the slot index and
/// also the fixed trial order used by insert, delete and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    pub(crate) const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Quadrant::NorthWest => "NW",
            Quadrant::NorthEast => "NE",
            Quadrant::SouthWest => "SW",
            Quadrant::SouthEast => "SE",
        }
    }

    /// Quadrant of `point` relative to `center`. Ties on either axis go north
    /// or west, matching the first-match trial order.
    #[inline]
    pub(crate) fn of(center: &Point, point: &Point) -> Quadrant {
        let west = point.x <= center.x;
        let north = point.y >= center.y;
        match (north, west) {
            (true, true) => Quadrant::NorthWest,
            (true, false) => Quadrant::NorthEast,
            (false, true) => Quadrant::SouthWest,
            (false, false) => Quadrant::SouthEast,
        }
    }
}

/// Axis-aligned bounds in min/max form. Comparisons against it use the same
/// `min_x()`/`max_x()` values `Rectangle::contains` uses, so a point a range
/// contains is never outside an extent that covers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RectExtent {
    pub(crate) min_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_x: f64,
    pub(crate) max_y: f64,
}

impl RectExtent {
    #[inline(always)]
    pub(crate) fn from_rect(rect: &Rectangle) -> Self {
        Self {
            min_x: rect.min_x(),
            min_y: rect.min_y(),
            max_x: rect.max_x(),
            max_y: rect.max_y(),
        }
    }

    #[inline(always)]
    pub(crate) fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    #[inline(always)]
    pub(crate) fn intersects(&self, range: &Rectangle) -> bool {
        !(range.min_x() > self.max_x
            || range.max_x() < self.min_x
            || range.min_y() > self.max_y
            || range.max_y() < self.min_y)
    }

    #[inline(always)]
    pub(crate) fn include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }
}

#[derive(Debug, Clone)]
pub(crate) enum NodeState {
    Leaf(LeafPoints),
    Internal(Box<[QuadNode; 4]>),
}

#[derive(Debug, Clone)]
pub(crate) struct QuadNode {
    pub(crate) boundary: Rectangle,
    /// Covers `boundary` and every point stored below this node. Rounded
    /// child edges can leave a stray point just outside its child's
    /// boundary, so queries prune against this instead.
    pub(crate) reach: RectExtent,
    pub(crate) depth: usize,
    pub(crate) state: NodeState,
}

impl QuadNode {
    pub(crate) fn new_leaf(boundary: Rectangle, depth: usize) -> Self {
        Self {
            boundary,
            reach: RectExtent::from_rect(&boundary),
            depth,
            state: NodeState::Leaf(LeafPoints::new()),
        }
    }

    /// Four empty leaves covering the quarters of this node's boundary.
    pub(crate) fn new_children(&self) -> Box<[QuadNode; 4]> {
        let depth = self.depth + 1;
        let [nw, ne, sw, se] = self.boundary.quadrants();
        Box::new([
            QuadNode::new_leaf(nw, depth),
            QuadNode::new_leaf(ne, depth),
            QuadNode::new_leaf(sw, depth),
            QuadNode::new_leaf(se, depth),
        ])
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf(_))
    }

    /// Stored point count if this node is a leaf.
    #[inline]
    pub(crate) fn leaf_len(&self) -> Option<usize> {
        match &self.state {
            NodeState::Leaf(points) => Some(points.len()),
            NodeState::Internal(_) => None,
        }
    }
}
