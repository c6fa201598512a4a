//! Breadth-first search over adjacency lists.
//!
//! Every edge costs one hop, so BFS order is shortest-path order: the first
//! time a node is discovered fixes its distance.  Callers validate node ids;
//! these functions index directly.

use std::collections::VecDeque;

use rd_core::NodeId;

/// `true` if `dst` is reachable from `src`.  Stops as soon as `dst` is
/// dequeued.
pub fn reachable(adjacency: &[Vec<NodeId>], src: NodeId, dst: NodeId) -> bool {
    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::new();

    visited[src.index()] = true;
    queue.push_back(src);

    while let Some(node) = queue.pop_front() {
        if node == dst {
            return true;
        }
        for &next in &adjacency[node.index()] {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

/// Shortest hop count `src → dst`.  Stops as soon as `dst` is dequeued.
pub fn hop_distance(adjacency: &[Vec<NodeId>], src: NodeId, dst: NodeId) -> Option<u32> {
    let mut dist: Vec<Option<u32>> = vec![None; adjacency.len()];
    let mut queue = VecDeque::new();

    dist[src.index()] = Some(0);
    queue.push_back(src);

    while let Some(node) = queue.pop_front() {
        let d = dist[node.index()]?;
        if node == dst {
            return Some(d);
        }
        for &next in &adjacency[node.index()] {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Hop counts from `src` to every node; runs to exhaustion.
pub fn hop_distances(adjacency: &[Vec<NodeId>], src: NodeId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; adjacency.len()];
    let mut queue = VecDeque::new();

    dist[src.index()] = Some(0);
    queue.push_back(src);

    while let Some(node) = queue.pop_front() {
        let Some(d) = dist[node.index()] else { continue };
        for &next in &adjacency[node.index()] {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}
