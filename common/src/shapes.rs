use rand::Rng;
use std::fmt;

/// A 2-D point. Equality is exact coordinate match.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle stored as a center and half-extents.
///
/// The rectangle spans `[x - w, x + w] x [y - h, y + h]`. Both predicates are
/// closed: points on an edge are contained and rectangles that only touch
/// along an edge intersect. North is +y.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn half_width(&self) -> f64 {
        self.w
    }

    pub fn half_height(&self) -> f64 {
        self.h
    }

    pub fn width(&self) -> f64 {
        self.w * 2.0
    }

    pub fn height(&self) -> f64 {
        self.h * 2.0
    }

    pub fn min_x(&self) -> f64 {
        self.x - self.w
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    pub fn min_y(&self) -> f64 {
        self.y - self.h
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// All components finite and half-extents non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w >= 0.0
            && self.h >= 0.0
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.min_x() > self.max_x()
            || other.max_x() < self.min_x()
            || other.min_y() > self.max_y()
            || other.max_y() < self.min_y())
    }

    /// Splits into four equal quarters, ordered NW, NE, SW, SE.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let w = self.w / 2.0;
        let h = self.h / 2.0;
        [
            Rectangle::new(self.x - w, self.y + h, w, h),
            Rectangle::new(self.x + w, self.y + h, w, h),
            Rectangle::new(self.x - w, self.y - h, w, h),
            Rectangle::new(self.x + w, self.y - h, w, h),
        ]
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            Self::safe_rand_f64(rng, self.min_x(), self.max_x()),
            Self::safe_rand_f64(rng, self.min_y(), self.max_y()),
        )
    }

    fn safe_rand_f64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center=({}, {}) w={} h={}", self.x, self.y, self.w, self.h)
    }
}
