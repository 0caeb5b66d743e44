// Path reconstruction: ordered depth-first search from source to sink
use crate::error::ItineraryError;
use crate::graph::{FlightGraph, NodeId};

struct Frame {
    node: NodeId,
    next: usize,
}

/// Walk from `source` to `sink`, trying outgoing segments in insertion order.
///
/// The first route that reaches `sink` wins. Every node is entered at most
/// once: a branch that loops back onto the route or into an already explored
/// node is skipped, so the search is linear in the number of segments.
pub fn reconstruct(
    graph: &FlightGraph,
    source: NodeId,
    sink: NodeId,
) -> Result<Vec<NodeId>, ItineraryError> {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![Frame {
        node: source,
        next: 0,
    }];
    seen[source] = true;

    while let Some(frame) = stack.last_mut() {
        if frame.node == sink {
            return Ok(stack.iter().map(|f| f.node).collect());
        }

        let outgoing = &graph.node(frame.node).outgoing;
        if frame.next < outgoing.len() {
            let next = outgoing[frame.next];
            frame.next += 1;

            if !seen[next] {
                seen[next] = true;
                stack.push(Frame { node: next, next: 0 });
            }
            continue;
        }

        // Every branch failed: backtrack.
        stack.pop();
    }

    Err(ItineraryError::NoPathFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn codes(graph: &FlightGraph, path: &[NodeId]) -> Vec<String> {
        path.iter().map(|&id| graph.code(id).to_string()).collect()
    }

    fn resolve_between(
        segments: &[(&str, &str)],
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, ItineraryError> {
        let graph = FlightGraph::from_segments(segments);
        let source = graph.id_of(from).unwrap();
        let sink = graph.id_of(to).unwrap();
        reconstruct(&graph, source, sink).map(|path| codes(&graph, &path))
    }

    #[test]
    fn test_follows_single_chain() {
        let path = resolve_between(
            &[("IND", "EWR"), ("SFO", "ATL"), ("GSO", "IND"), ("ATL", "GSO")],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "GSO", "IND", "EWR"]);
    }

    #[test]
    fn test_backtracks_out_of_loop_branch() {
        // ATL -> GSO only leads back to ATL
        let path = resolve_between(
            &[("SFO", "ATL"), ("ATL", "GSO"), ("GSO", "ATL"), ("ATL", "EWR")],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "EWR"]);
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        let path = resolve_between(
            &[("SFO", "LAX"), ("SFO", "ATL"), ("ATL", "EWR")],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "EWR"]);
    }

    #[test]
    fn test_first_successful_branch_wins() {
        let path = resolve_between(
            &[("SFO", "ATL"), ("SFO", "DEN"), ("ATL", "EWR"), ("DEN", "EWR")],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "EWR"]);
    }

    #[test]
    fn test_nested_loops_back_onto_path_are_abandoned() {
        let path = resolve_between(
            &[
                ("SFO", "ATL"),
                ("ATL", "GSO"),
                ("GSO", "ATL"),
                ("GSO", "BOS"),
                ("BOS", "ATL"),
                ("ATL", "EWR"),
            ],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "EWR"]);
    }

    #[test]
    fn test_shared_dead_end_is_skipped() {
        let path = resolve_between(
            &[
                ("SFO", "LAX"),
                ("LAX", "DEN"),
                ("SFO", "ATL"),
                ("ATL", "DEN"),
                ("ATL", "EWR"),
            ],
            "SFO",
            "EWR",
        )
        .unwrap();
        assert_eq!(path, vec!["SFO", "ATL", "EWR"]);
    }

    #[test]
    fn test_unreachable_sink_is_no_path() {
        let result = resolve_between(&[("SFO", "ATL"), ("EWR", "ATL")], "SFO", "EWR");
        assert_eq!(result, Err(ItineraryError::NoPathFound));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let codes: Vec<String> = (0..20_000).map(|i| format!("A{i}")).collect();
        let segments: Vec<(String, String)> = codes
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        let graph = FlightGraph::from_segments(&segments);
        let source = graph.id_of("A0").unwrap();
        let sink = graph.id_of("A19999").unwrap();

        let path = reconstruct(&graph, source, sink).unwrap();
        assert_eq!(path.len(), 20_000);
    }

    // Ai -> {Bi, Ci} -> A(i+1), with the last diamond feeding back into the
    // first. Every diamond node fails only because of that back edge.
    fn diamond_chain(diamonds: usize) -> Vec<(String, String)> {
        let mut segments = vec![("SRC".to_string(), "A00".to_string())];
        for i in 0..diamonds {
            let (a, next) = (format!("A{i:02}"), format!("A{:02}", i + 1));
            for mid in [format!("B{i:02}"), format!("C{i:02}")] {
                segments.push((a.clone(), mid.clone()));
                segments.push((mid, next.clone()));
            }
        }
        segments.push((format!("A{diamonds:02}"), "A00".to_string()));
        segments.push(("A00".to_string(), "ZZZ".to_string()));
        segments
    }

    #[test]
    fn test_diamond_chain_with_back_edge_is_linear() {
        let segments = diamond_chain(60);
        let graph = FlightGraph::from_segments(&segments);
        let source = graph.id_of("SRC").unwrap();
        let sink = graph.id_of("ZZZ").unwrap();

        let started = Instant::now();
        let path = reconstruct(&graph, source, sink).unwrap();

        assert_eq!(codes(&graph, &path), vec!["SRC", "A00", "ZZZ"]);
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
