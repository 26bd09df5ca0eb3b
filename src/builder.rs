use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::ChainArena;
use crate::errors::ChainResult;

/// Number of data nodes in the chain (sentinel not counted).
pub const NODE_COUNT: usize = 5;

/// Builds the chain: one sentinel head plus `NODE_COUNT` data nodes holding
/// 0..NODE_COUNT in order.
///
/// Construction either completes fully or rolls back: on a failed allocation
/// every node allocated so far is released before the error is returned, so
/// the caller never sees a partial chain.
pub struct ChainBuilder {
    capacity: usize,
    allocated: Vec<Index>,
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::with_capacity(NODE_COUNT + 1)
    }

    /// Builder over an arena of the given capacity. Capacities below
    /// `NODE_COUNT + 1` make construction fail at a deterministic allocation
    /// point.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            allocated: Vec::with_capacity(capacity),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self) -> ChainResult<ChainArena> {
        let mut chain = ChainArena::with_capacity(self.capacity);
        self.allocated.clear();

        match self.fill(&mut chain) {
            Ok(()) => {
                self.allocated.clear();
                Ok(chain)
            }
            Err(e) => {
                let released = self.rollback(&mut chain);
                debug!(released, "rolled back partial chain");
                Err(e)
            }
        }
    }

    #[instrument(level = "debug", skip_all)]
    fn fill(&mut self, chain: &mut ChainArena) -> ChainResult<()> {
        // Sentinel first; a failure here leaves no partial state to clean up
        let sentinel = chain.try_insert(None)?;
        self.allocated.push(sentinel);

        for i in 0..NODE_COUNT {
            let node_idx = chain.try_insert(Some(i as i64))?;
            self.allocated.push(node_idx);
        }
        Ok(())
    }

    /// Walks the rollback list once, releasing every node allocated so far.
    /// Returns the number of nodes released.
    #[instrument(level = "debug", skip_all)]
    fn rollback(&mut self, chain: &mut ChainArena) -> usize {
        let mut released = 0;
        for idx in self.allocated.drain(..).rev() {
            if chain.release(idx).is_some() {
                released += 1;
            }
        }
        debug_assert!(chain.is_empty());
        released
    }
}
