//! Unit tests for rd-graph.
//!
//! All tests use small hand-built maps.

#[cfg(test)]
mod helpers {
    use rd_core::NodeId;
    use crate::RouteGraph;

    /// Three locations in a one-way chain:
    ///
    /// ```text
    /// A → B → C
    /// ```
    pub fn chain() -> (RouteGraph, [NodeId; 3]) {
        let mut g = RouteGraph::with_size(3);
        let ids = [NodeId(0), NodeId(1), NodeId(2)];
        for (id, name) in ids.iter().zip(["A", "B", "C"]) {
            g.add_info(*id, name.to_string()).unwrap();
        }
        g.add_edge(ids[0], ids[1]).unwrap();
        g.add_edge(ids[1], ids[2]).unwrap();
        (g, ids)
    }

    /// Five locations:
    ///
    /// ```text
    /// 0 → 1 → 2 → 4
    /// 0 → 3 → 4
    /// 4 → 0
    /// ```
    ///
    /// Shortest 0→4 is two hops via 3.
    pub fn diamond() -> (RouteGraph<()>, [NodeId; 5]) {
        let mut g = RouteGraph::with_size(5);
        let n = [NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4)];
        for (a, b) in [(0, 1), (1, 2), (2, 4), (0, 3), (3, 4), (4, 0)] {
            g.add_edge(n[a], n[b]).unwrap();
        }
        (g, n)
    }
}

// ── Structure and edges ───────────────────────────────────────────────────────

#[cfg(test)]
mod structure {
    use rd_core::NodeId;
    use crate::{GraphError, RouteGraph};

    #[test]
    fn empty_graph() {
        let g: RouteGraph = RouteGraph::default();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn payload_roundtrip() {
        let (g, [a, _, c]) = super::helpers::chain();
        assert_eq!(g.info(a).unwrap(), "A");
        assert_eq!(g.info(c).unwrap(), "C");
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g: RouteGraph<()> = RouteGraph::with_size(2);
        assert!(g.add_edge(NodeId(0), NodeId(1)).unwrap());
        assert!(!g.add_edge(NodeId(0), NodeId(1)).unwrap());
        assert_eq!(g.neighbors(NodeId(0)).unwrap(), &[NodeId(1)]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn has_edge_after_add_and_remove() {
        let mut g: RouteGraph<()> = RouteGraph::with_size(2);
        g.add_edge(NodeId(0), NodeId(1)).unwrap();
        assert!(g.has_edge(NodeId(0), NodeId(1)).unwrap());
        assert!(!g.has_edge(NodeId(1), NodeId(0)).unwrap()); // directed

        assert!(g.remove_edge(NodeId(0), NodeId(1)).unwrap());
        assert!(!g.has_edge(NodeId(0), NodeId(1)).unwrap());
        // Removing again is a no-op.
        assert!(!g.remove_edge(NodeId(0), NodeId(1)).unwrap());
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut g: RouteGraph<()> = RouteGraph::with_size(4);
        for dst in [3, 1, 2] {
            g.add_edge(NodeId(0), NodeId(dst)).unwrap();
        }
        g.remove_edge(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(g.neighbors(NodeId(0)).unwrap(), &[NodeId(3), NodeId(2)]);
        assert_eq!(g.neighbor_count(NodeId(0)).unwrap(), 2);
        assert_eq!(g.neighbor(NodeId(0), 1).unwrap(), Some(NodeId(2)));
        assert_eq!(g.neighbor(NodeId(0), 5).unwrap(), None);
    }

    #[test]
    fn set_size_resets_edges() {
        let (mut g, _) = super::helpers::chain();
        g.set_size(4);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.info(NodeId(0)).unwrap(), "");
    }

    #[test]
    fn out_of_range_is_reported() {
        let (mut g, [a, _, _]) = super::helpers::chain();
        let bad = NodeId(3);
        let err = GraphError::OutOfRange { node: bad, size: 3 };
        assert_eq!(g.add_edge(a, bad), Err(err.clone()));
        assert_eq!(g.has_edge(bad, a), Err(err.clone()));
        assert_eq!(g.info(bad).map(|s| s.clone()), Err(err.clone()));
        assert_eq!(g.path_exists(a, bad), Err(err.clone()));
        assert_eq!(g.distance(bad, a), Err(err.clone()));
        assert_eq!(g.distances_from(bad), Err(err.clone()));
        assert_eq!(g.add_info(bad, "X".into()), Err(err));
        // The failed calls changed nothing.
        assert_eq!(g.edge_count(), 2);
    }
}

// ── BFS queries ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    #[test]
    fn chain_scenario() {
        let (g, [a, b, c]) = super::helpers::chain();
        assert!(g.path_exists(a, c).unwrap());
        assert_eq!(g.distance(a, c).unwrap(), Some(2));
        assert_eq!(g.distance(c, a).unwrap(), None);
        assert!(!g.path_exists(c, a).unwrap());
        assert_eq!(g.distance(a, b).unwrap(), Some(1));
    }

    #[test]
    fn self_distance_is_zero() {
        let (g, nodes) = super::helpers::diamond();
        for n in nodes {
            assert_eq!(g.distance(n, n).unwrap(), Some(0));
            assert!(g.path_exists(n, n).unwrap());
        }
    }

    #[test]
    fn shortest_of_two_routes() {
        let (g, n) = super::helpers::diamond();
        assert_eq!(g.distance(n[0], n[4]).unwrap(), Some(2));
        assert_eq!(g.distance(n[1], n[0]).unwrap(), Some(3));
    }

    #[test]
    fn distance_none_iff_no_path() {
        let (g, n) = super::helpers::diamond();
        let (c, _) = super::helpers::chain();
        for a in n {
            for b in n {
                assert_eq!(
                    g.distance(a, b).unwrap().is_none(),
                    !g.path_exists(a, b).unwrap()
                );
            }
        }
        for a in c.nodes() {
            for b in c.nodes() {
                assert_eq!(
                    c.distance(a, b).unwrap().is_none(),
                    !c.path_exists(a, b).unwrap()
                );
            }
        }
    }

    #[test]
    fn distances_from_matches_pairwise() {
        let (g, n) = super::helpers::diamond();
        for src in n {
            let row = g.distances_from(src).unwrap();
            for dst in n {
                assert_eq!(row[dst.index()], g.distance(src, dst).unwrap());
            }
        }
    }

    #[test]
    fn via_waypoint() {
        let (g, [a, b, c]) = super::helpers::chain();
        assert_eq!(g.distance_via(a, b, c).unwrap(), Some(2));
        assert_eq!(g.distance_via(a, c, b).unwrap(), None); // C → B missing
        assert_eq!(g.distance_via(a, a, c).unwrap(), Some(2));
    }
}

// ── Topology edits ────────────────────────────────────────────────────────────

#[cfg(test)]
mod edits {
    use rd_core::NodeId;
    use crate::{RouteGraph, TopologyEdit};

    fn pair() -> (RouteGraph<()>, NodeId, NodeId) {
        (RouteGraph::with_size(2), NodeId(0), NodeId(1))
    }

    #[test]
    fn codes() {
        assert_eq!(TopologyEdit::from_code(0), TopologyEdit::AddOneWay);
        assert_eq!(TopologyEdit::from_code(1), TopologyEdit::RemoveBoth);
        assert_eq!(TopologyEdit::from_code(2), TopologyEdit::AddBoth);
        assert_eq!(TopologyEdit::from_code(3), TopologyEdit::Reverse);
        assert_eq!(TopologyEdit::from_code(9), TopologyEdit::Reverse);
    }

    #[test]
    fn add_and_remove_both() {
        let (mut g, a, b) = pair();
        TopologyEdit::AddBoth.apply(&mut g, a, b).unwrap();
        assert!(g.has_edge(a, b).unwrap() && g.has_edge(b, a).unwrap());
        TopologyEdit::RemoveBoth.apply(&mut g, a, b).unwrap();
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn reverse_one_way() {
        let (mut g, a, b) = pair();
        TopologyEdit::AddOneWay.apply(&mut g, a, b).unwrap();
        TopologyEdit::Reverse.apply(&mut g, a, b).unwrap();
        assert!(!g.has_edge(a, b).unwrap());
        assert!(g.has_edge(b, a).unwrap());

        // Reversing with the arguments swapped flips it back.
        TopologyEdit::Reverse.apply(&mut g, b, a).unwrap();
        assert!(g.has_edge(a, b).unwrap());
        assert!(!g.has_edge(b, a).unwrap());
    }

    #[test]
    fn reverse_two_way_or_absent_is_noop() {
        let (mut g, a, b) = pair();
        TopologyEdit::Reverse.apply(&mut g, a, b).unwrap();
        assert_eq!(g.edge_count(), 0);

        TopologyEdit::AddBoth.apply(&mut g, a, b).unwrap();
        TopologyEdit::Reverse.apply(&mut g, a, b).unwrap();
        assert_eq!(g.edge_count(), 2);
    }
}

// ── Distance table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use rd_core::NodeId;
    use crate::{DistanceTable, GraphError};

    #[test]
    fn matches_bfs() {
        let (g, n) = super::helpers::diamond();
        let t = DistanceTable::compute(&g);
        assert_eq!(t.size(), 5);
        for a in n {
            for b in n {
                assert_eq!(t.get(a, b).unwrap(), g.distance(a, b).unwrap());
                assert_eq!(t.hops(a, b), g.distance(a, b).unwrap());
            }
        }
        assert_eq!(t.row(n[0]).unwrap().len(), 5);
    }

    #[test]
    fn refresh_sees_edits() {
        let (mut g, [a, _, c]) = super::helpers::chain();
        let mut t = DistanceTable::compute(&g);
        assert_eq!(t.hops(c, a), None);

        g.add_edge(c, a).unwrap();
        // Stale until refreshed.
        assert_eq!(t.hops(c, a), None);
        t.refresh(&g);
        assert_eq!(t.hops(c, a), Some(1));
    }

    #[test]
    fn out_of_range() {
        let t = DistanceTable::empty();
        assert_eq!(t.hops(NodeId(0), NodeId(0)), None);
        assert_eq!(
            t.get(NodeId(0), NodeId(0)),
            Err(GraphError::OutOfRange { node: NodeId(0), size: 0 })
        );
    }
}
