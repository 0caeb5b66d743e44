// Flight graph built from an unordered list of segments
// Nodes live in an arena owned by the graph; adjacency is stored as indices into it.

use std::collections::HashMap;

/// Index of a node inside its [`FlightGraph`].
pub type NodeId = usize;

// One airport in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub code: String,
    pub outgoing: Vec<NodeId>,
    pub incoming: Vec<NodeId>,
    pub visited: bool,
    pub is_source: bool,
    pub is_sink: bool,
}

impl Node {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            visited: false,
            is_source: false,
            is_sink: false,
        }
    }
}

/// Directed graph of airports. Nodes are kept in the order their code was
/// first seen in the segment list, which is the order every scan uses.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(origin, destination)` pairs.
    ///
    /// Repeated segments are kept as duplicate adjacency entries. Codes are
    /// not validated here.
    pub fn from_segments<S: AsRef<str>>(segments: &[(S, S)]) -> Self {
        let mut graph = Self::new();
        for (origin, destination) in segments {
            graph.add_segment(origin.as_ref(), destination.as_ref());
        }
        graph
    }

    pub fn add_segment(&mut self, origin: &str, destination: &str) {
        let from = self.node_id_or_insert(origin);
        let to = self.node_id_or_insert(destination);

        self.nodes[from].outgoing.push(to);
        self.nodes[to].incoming.push(from);
    }

    fn node_id_or_insert(&mut self, code: &str) -> NodeId {
        if let Some(&id) = self.index.get(code) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(code));
        self.index.insert(code.to_string(), id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn id_of(&self, code: &str) -> Option<NodeId> {
        self.index.get(code).copied()
    }

    pub fn code(&self, id: NodeId) -> &str {
        &self.nodes[id].code
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Clear transient traversal marks so the graph can be classified again
    pub fn reset_visited(&mut self) {
        for node in &mut self.nodes {
            node.visited = false;
        }
    }
}
