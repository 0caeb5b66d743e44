// Itinerary resolver: runs the graph stages for one request
use std::fmt;

use crate::error::ItineraryError;
use crate::graph::FlightGraph;
use crate::path::reconstruct;
use crate::topology::{check_degeneracy, classify};

/// Ordered airports from the first departure to the final arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub path: Vec<String>,
}

impl Itinerary {
    pub fn start(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

// Renders as `[SFO,ATL,EWR]=>[SFO,EWR]`
impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]=>[{},{}]", self.path.join(","), self.start(), self.end())
    }
}

/// Reconstructs itineraries from unordered flight segments.
///
/// Stateless: every call builds and drops its own graph, so one resolver can
/// be shared freely between requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryResolver;

impl ItineraryResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve<S: AsRef<str>>(
        &self,
        segments: &[(S, S)],
    ) -> Result<Itinerary, ItineraryError> {
        let mut graph = FlightGraph::from_segments(segments);

        let topology = classify(&mut graph)?;
        check_degeneracy(&graph, &topology)?;

        let route = reconstruct(&graph, topology.source, topology.sink)?;

        Ok(Itinerary {
            path: route
                .into_iter()
                .map(|id| graph.code(id).to_string())
                .collect(),
        })
    }
}
