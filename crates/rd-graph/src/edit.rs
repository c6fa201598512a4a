//! Road-change commands.

use rd_core::NodeId;

use crate::{GraphResult, RouteGraph};

/// One topology change between two locations `a` and `b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopologyEdit {
    /// Open the one-way road `a → b`.
    AddOneWay,
    /// Close the road in both directions.
    RemoveBoth,
    /// Open the road in both directions.
    AddBoth,
    /// Flip a one-way road.  If both or neither directions exist, nothing
    /// changes.
    Reverse,
}

impl TopologyEdit {
    /// Decode the numeric edit code used by the command stream: `0`, `1`, `2`
    /// map to the first three variants and any other code means `Reverse`.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::AddOneWay,
            1 => Self::RemoveBoth,
            2 => Self::AddBoth,
            _ => Self::Reverse,
        }
    }

    pub fn apply<P>(self, graph: &mut RouteGraph<P>, a: NodeId, b: NodeId) -> GraphResult<()> {
        match self {
            Self::AddOneWay => {
                graph.add_edge(a, b)?;
            }
            Self::RemoveBoth => {
                graph.remove_edge(a, b)?;
                graph.remove_edge(b, a)?;
            }
            Self::AddBoth => {
                graph.add_edge(a, b)?;
                graph.add_edge(b, a)?;
            }
            Self::Reverse => {
                let ab = graph.has_edge(a, b)?;
                let ba = graph.has_edge(b, a)?;
                if ab && !ba {
                    graph.add_edge(b, a)?;
                    graph.remove_edge(a, b)?;
                } else if !ab && ba {
                    graph.add_edge(a, b)?;
                    graph.remove_edge(b, a)?;
                }
            }
        }
        Ok(())
    }
}
