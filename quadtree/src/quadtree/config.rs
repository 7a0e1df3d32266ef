use crate::error::{QuadtreeError, QuadtreeResult};

/// Largest accepted `Config::max_depth`. Halving a unit half-extent this many
/// times reaches the smallest subnormal `f64`, so deeper splits cannot
/// separate anything. It also bounds recursion during insert and delete.
pub const MAX_DEPTH_LIMIT: usize = 1074;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Points a leaf holds before an insert splits it.
    pub node_capacity: usize,
    /// Leaves at this depth stop splitting and grow past `node_capacity`.
    pub max_depth: usize,
}

impl Config {
    pub fn with_node_capacity(node_capacity: usize) -> Self {
        Config {
            node_capacity,
            ..Config::default()
        }
    }

    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 {
            return Err(QuadtreeError::InvalidNodeCapacity {
                capacity: self.node_capacity,
            });
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadtreeError::InvalidMaxDepth {
                max_depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            // Deep enough that only coincident or near-coincident points reach it.
            max_depth: 32,
        }
    }
}
