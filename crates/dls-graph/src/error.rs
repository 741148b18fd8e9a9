//! Graph-subsystem error type.

use dls_core::VertexId;
use thiserror::Error;

/// Errors produced by `dls-graph`.
///
/// Construction errors (`DuplicateVertex`, `UnknownVertex`, `SelfLoop`,
/// `DuplicateEdge`) are fatal to the construction call.  `NotComputed` is a
/// sequencing error: the all-pairs tables were requested before
/// `floyd_warshall()` ran.  An unreachable destination is not an error —
/// the path queries return `None` for that.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    #[error("self-loop on {0} rejected")]
    SelfLoop(VertexId),

    #[error("edge between {0} and {1} already exists")]
    DuplicateEdge(VertexId, VertexId),

    #[error("{edges} edges cannot connect {nodes} vertices (need at least {})", nodes.saturating_sub(1))]
    NotEnoughEdges { nodes: usize, edges: usize },

    #[error("{edges} edges exceed the {} possible between {nodes} vertices", nodes * nodes.saturating_sub(1) / 2)]
    TooManyEdges { nodes: usize, edges: usize },

    #[error("all-pairs path requested before floyd_warshall() was run")]
    NotComputed,
}

pub type GraphResult<T> = Result<T, GraphError>;
