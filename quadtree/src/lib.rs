pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use error::{InvariantViolation, QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadTree};
