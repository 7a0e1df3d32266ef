//! Point region quadtree.
//!
//! Every node is either a leaf holding up to `Config::node_capacity` points or
//! an internal node owning exactly four children (NW, NE, SW, SE). A leaf that
//! overflows splits into four quarters of its boundary; a delete that leaves
//! four sibling leaves with no more than `node_capacity` points between them
//! folds them back into their parent.
//!
//! Points on a dividing line belong to the first quadrant that accepts them,
//! tried in NW, NE, SW, SE order.

mod api;
mod config;
mod delete;
mod insert;
mod maintenance;
mod query_rect;
mod types;

pub use config::{Config, MAX_DEPTH_LIMIT};
pub(crate) use types::*;

/// Quadtree over a fixed bounding rectangle.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: QuadNode,
    config: Config,
    len: usize,
}
