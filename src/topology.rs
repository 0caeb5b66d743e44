// Topology classification: source/sink detection, reachability and degeneracy
use crate::error::ItineraryError;
use crate::graph::{FlightGraph, NodeId};

/// The endpoints of a classified [`FlightGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub source: NodeId,
    pub sink: NodeId,
}

/// Find the source and sink of `graph` and check every airport is reachable
/// from the source.
///
/// Candidates are scanned in first-seen order and the first source wins. A
/// second source can never be reached, so it surfaces as `Disconnected`. A
/// connected graph with more than one dead end fails with `MultipleSinks`.
///
/// Marks the chosen endpoints with `is_source`/`is_sink` and leaves every
/// reachable node `visited`.
pub fn classify(graph: &mut FlightGraph) -> Result<Topology, ItineraryError> {
    graph.reset_visited();

    let mut source_candidates = Vec::new();
    let mut sink_candidates = Vec::new();

    // Self-loops don't disqualify a node, otherwise a lone A->A segment would
    // look like it has neither a start nor an end.
    for (id, node) in graph.nodes() {
        if node.incoming.iter().all(|&from| from == id) {
            source_candidates.push(id);
        }
        if node.outgoing.iter().all(|&to| to == id) {
            sink_candidates.push(id);
        }
    }

    let source = *source_candidates
        .first()
        .ok_or(ItineraryError::NoSourceFound)?;
    let sink = *sink_candidates.first().ok_or(ItineraryError::NoSinkFound)?;

    mark_reachable(graph, source);

    let codes: Vec<String> = graph
        .nodes()
        .filter(|(_, node)| !node.visited)
        .map(|(_, node)| node.code.clone())
        .collect();
    if !codes.is_empty() {
        return Err(ItineraryError::Disconnected { codes });
    }

    if sink_candidates.len() > 1 {
        return Err(ItineraryError::MultipleSinks {
            codes: sink_candidates
                .iter()
                .map(|&id| graph.code(id).to_string())
                .collect(),
        });
    }

    graph.node_mut(source).is_source = true;
    graph.node_mut(sink).is_sink = true;

    Ok(Topology { source, sink })
}

// Depth-first walk over outgoing edges; each node is entered at most once.
fn mark_reachable(graph: &mut FlightGraph, start: NodeId) {
    let mut stack = vec![start];
    graph.node_mut(start).visited = true;

    while let Some(id) = stack.pop() {
        // Push in reverse so neighbours are entered in insertion order.
        for i in (0..graph.node(id).outgoing.len()).rev() {
            let next = graph.node(id).outgoing[i];
            if !graph.node(next).visited {
                graph.node_mut(next).visited = true;
                stack.push(next);
            }
        }
    }
}

/// Reject a classification whose source and sink are the same airport.
pub fn check_degeneracy(graph: &FlightGraph, topology: &Topology) -> Result<(), ItineraryError> {
    if topology.source == topology.sink {
        return Err(ItineraryError::CircularOrIsolated {
            code: graph.code(topology.source).to_string(),
        });
    }
    Ok(())
}
