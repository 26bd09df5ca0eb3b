use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{ChainError, ChainResult};

/// Node in the arena-backed chain.
///
/// The sentinel head carries no payload; its `data` is `None` and is never
/// read, only its `next` link.
#[derive(Debug)]
pub struct ChainNode {
    /// Payload value, `None` for the sentinel
    pub data: Option<i64>,
    /// Index of the successor node in the arena, `None` at the end of the chain
    pub next: Option<Index>,
}

/// Arena-based singly linked chain.
///
/// Uses a generational arena for memory-safe node references: indices are
/// invalidated on release, so a node can never be freed twice, and dropping
/// the arena releases every remaining node. The arena is created with a fixed
/// capacity and never grows; an exhausted arena is the allocation-failure
/// condition.
#[derive(Debug)]
pub struct ChainArena {
    /// Arena storage for all chain nodes
    arena: Arena<ChainNode>,
    /// Index of the sentinel head, None for empty chains
    head: Option<Index>,
    /// Index of the last appended node, for O(1) append
    tail: Option<Index>,
}

impl ChainArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Allocates a node at the tail of the chain.
    ///
    /// The first inserted node becomes the head (the sentinel, when inserted
    /// with `data = None`). Fails with `AllocationFailure` when the arena is
    /// at capacity; no link is modified in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn try_insert(&mut self, data: Option<i64>) -> ChainResult<Index> {
        let node = ChainNode { data, next: None };
        let node_idx =
            self.arena
                .try_insert(node)
                .map_err(|_| ChainError::AllocationFailure {
                    allocated: self.arena.len(),
                    capacity: self.arena.capacity(),
                })?;

        if let Some(tail_idx) = self.tail {
            if let Some(tail) = self.arena.get_mut(tail_idx) {
                tail.next = Some(node_idx);
            }
        } else {
            self.head = Some(node_idx);
        }
        self.tail = Some(node_idx);

        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&ChainNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn head(&self) -> Option<Index> {
        self.head
    }

    /// Releases a single node. Returns `None` if the index is stale
    /// (already released), so a double release is a no-op.
    ///
    /// Does not relink predecessors; intended for the rollback path where the
    /// whole chain is being torn down.
    #[instrument(level = "trace", skip(self))]
    pub fn release(&mut self, idx: Index) -> Option<ChainNode> {
        let node = self.arena.remove(idx);
        if node.is_some() {
            if self.head == Some(idx) {
                self.head = None;
            }
            if self.tail == Some(idx) {
                self.tail = None;
            }
        }
        node
    }

    /// Releases every node and resets the cursors. Returns the number of
    /// nodes released.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) -> usize {
        let released = self.arena.len();
        self.arena.clear();
        self.head = None;
        self.tail = None;
        released
    }

    /// Number of live nodes, sentinel included.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates the data nodes in chain order, skipping the sentinel.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> ChainIterator {
        ChainIterator::new(self)
    }

    /// Collects all payload values in chain order.
    ///
    /// Empty chains return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn values(&self) -> Vec<i64> {
        self.iter().filter_map(|(_, node)| node.data).collect()
    }
}

pub struct ChainIterator<'a> {
    chain: &'a ChainArena,
    cursor: Option<Index>,
}

impl<'a> ChainIterator<'a> {
    fn new(chain: &'a ChainArena) -> Self {
        // Start after the sentinel
        let cursor = chain
            .head()
            .and_then(|head| chain.get_node(head))
            .and_then(|sentinel| sentinel.next);
        Self { chain, cursor }
    }
}

impl<'a> Iterator for ChainIterator<'a> {
    type Item = (Index, &'a ChainNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.cursor?;
        let node = self.chain.get_node(current_idx)?;
        self.cursor = node.next;
        Some((current_idx, node))
    }
}
