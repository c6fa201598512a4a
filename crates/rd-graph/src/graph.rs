//! Adjacency-list route graph.
//!
//! # Data layout
//!
//! Unlike a compressed-row road network, edges here change between queries
//! (roads open, close, and flip direction), so each node owns a small `Vec`
//! of outgoing neighbours:
//!
//! ```text
//! adjacency[n] = [m0, m1, ...]   // insertion order, no duplicates
//! info[n]      = payload         // display name by default
//! ```
//!
//! Neighbour order is observable: ride drop-off substitution picks the
//! first reachable neighbour in insertion order.

use rd_core::NodeId;

use crate::bfs;
use crate::{GraphError, GraphResult};

/// Directed graph over nodes `0..node_count()` with a payload per node.
///
/// Every method taking a `NodeId` checks it against the current size and
/// returns [`GraphError::OutOfRange`] rather than panicking.
#[derive(Clone, Debug)]
pub struct RouteGraph<P = String> {
    adjacency: Vec<Vec<NodeId>>,
    info:      Vec<P>,
}

impl<P: Default + Clone> RouteGraph<P> {
    /// A graph of `size` isolated nodes with default payloads.
    pub fn with_size(size: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); size],
            info:      vec![P::default(); size],
        }
    }

    /// Resize to `size` nodes, dropping every edge and payload.
    pub fn set_size(&mut self, size: usize) {
        *self = Self::with_size(size);
    }
}

impl<P: Default + Clone> Default for RouteGraph<P> {
    fn default() -> Self {
        Self::with_size(0)
    }
}

impl<P> RouteGraph<P> {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len() as u32).map(NodeId)
    }

    #[inline]
    fn check(&self, node: NodeId) -> GraphResult<usize> {
        let i = node.index();
        if i < self.adjacency.len() {
            Ok(i)
        } else {
            Err(GraphError::OutOfRange { node, size: self.adjacency.len() })
        }
    }

    // ── Payload ───────────────────────────────────────────────────────────

    pub fn add_info(&mut self, node: NodeId, payload: P) -> GraphResult<()> {
        let i = self.check(node)?;
        self.info[i] = payload;
        Ok(())
    }

    pub fn info(&self, node: NodeId) -> GraphResult<&P> {
        let i = self.check(node)?;
        Ok(&self.info[i])
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Add the directed edge `src → dst`.  Returns `false` if it already
    /// existed (the graph is left unchanged).
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<bool> {
        if self.has_edge(src, dst)? {
            return Ok(false);
        }
        self.adjacency[src.index()].push(dst);
        Ok(true)
    }

    /// Remove `src → dst` if present, preserving the order of the remaining
    /// neighbours.  Returns whether an edge was removed.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<bool> {
        let s = self.check(src)?;
        self.check(dst)?;
        let out = &mut self.adjacency[s];
        match out.iter().position(|&n| n == dst) {
            Some(pos) => {
                out.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> GraphResult<bool> {
        let s = self.check(src)?;
        self.check(dst)?;
        Ok(self.adjacency[s].contains(&dst))
    }

    /// Outgoing neighbours of `node` in insertion order.
    pub fn neighbors(&self, node: NodeId) -> GraphResult<&[NodeId]> {
        let i = self.check(node)?;
        Ok(&self.adjacency[i])
    }

    pub fn neighbor_count(&self, node: NodeId) -> GraphResult<usize> {
        Ok(self.neighbors(node)?.len())
    }

    /// The `index`-th outgoing neighbour of `node`, if it has that many.
    pub fn neighbor(&self, node: NodeId, index: usize) -> GraphResult<Option<NodeId>> {
        Ok(self.neighbors(node)?.get(index).copied())
    }

    // ── Breadth-first queries ─────────────────────────────────────────────

    /// `true` if a directed path leads from `src` to `dst`.  A node always
    /// reaches itself.
    pub fn path_exists(&self, src: NodeId, dst: NodeId) -> GraphResult<bool> {
        self.check(src)?;
        self.check(dst)?;
        Ok(bfs::reachable(&self.adjacency, src, dst))
    }

    /// Shortest hop count from `src` to `dst`, or `None` if unreachable.
    pub fn distance(&self, src: NodeId, dst: NodeId) -> GraphResult<Option<u32>> {
        self.check(src)?;
        self.check(dst)?;
        Ok(bfs::hop_distance(&self.adjacency, src, dst))
    }

    /// Hop count of the route `src → via → dst`, or `None` if either leg is
    /// unreachable.
    pub fn distance_via(
        &self,
        src: NodeId,
        via: NodeId,
        dst: NodeId,
    ) -> GraphResult<Option<u32>> {
        let first  = self.distance(src, via)?;
        let second = self.distance(via, dst)?;
        Ok(first.zip(second).map(|(a, b)| a + b))
    }

    /// Hop counts from `node` to every node, indexed by `NodeId`.
    pub fn distances_from(&self, node: NodeId) -> GraphResult<Vec<Option<u32>>> {
        self.check(node)?;
        Ok(bfs::hop_distances(&self.adjacency, node))
    }
}
