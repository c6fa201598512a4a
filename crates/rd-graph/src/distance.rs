//! All-pairs hop-count table.
//!
//! Dispatch compares many drivers against one pickup, so it reads
//! precomputed distances instead of running a BFS per driver.  The table is
//! a snapshot: any edge change invalidates it, and the owner must call
//! [`DistanceTable::refresh`] (a full O(V·(V+E)) sweep) before reading
//! again.  Row-major storage, `hops[src * size + dst]`.

use log::debug;

use rd_core::NodeId;

use crate::{GraphError, GraphResult, RouteGraph};

#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    size: usize,
    hops: Vec<Option<u32>>,
}

impl DistanceTable {
    /// A 0×0 table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Run one BFS from every node of `graph`.
    pub fn compute<P>(graph: &RouteGraph<P>) -> Self {
        let mut table = Self::empty();
        table.refresh(graph);
        table
    }

    /// Recompute every row from the current topology.
    pub fn refresh<P>(&mut self, graph: &RouteGraph<P>) {
        let size = graph.node_count();
        let mut hops = Vec::with_capacity(size * size);
        for node in graph.nodes() {
            // `node` comes from the graph's own range.
            if let Ok(row) = graph.distances_from(node) {
                hops.extend(row);
            }
        }
        debug!("distance table refreshed: {size} nodes, {} edges", graph.edge_count());
        self.size = size;
        self.hops = hops;
    }

    /// Side length of the table (node count at the last refresh).
    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, node: NodeId) -> GraphResult<usize> {
        if node.index() < self.size {
            Ok(node.index())
        } else {
            Err(GraphError::OutOfRange { node, size: self.size })
        }
    }

    /// Checked lookup of the hop count `src → dst`.
    pub fn get(&self, src: NodeId, dst: NodeId) -> GraphResult<Option<u32>> {
        let s = self.check(src)?;
        let d = self.check(dst)?;
        Ok(self.hops[s * self.size + d])
    }

    /// Unchecked-style lookup for hot loops: ids outside the table read as
    /// unreachable.
    #[inline]
    pub fn hops(&self, src: NodeId, dst: NodeId) -> Option<u32> {
        if src.index() >= self.size || dst.index() >= self.size {
            return None;
        }
        self.hops[src.index() * self.size + dst.index()]
    }

    /// Hop counts from `src` to every node.
    pub fn row(&self, src: NodeId) -> GraphResult<&[Option<u32>]> {
        let s = self.check(src)?;
        Ok(&self.hops[s * self.size..(s + 1) * self.size])
    }
}
