// Flight path tracker: rebuilds a traveller's itinerary from unordered flight segments

// Itinerary reconstruction
pub mod error;
pub mod graph;
pub mod path;
pub mod resolver;
pub mod topology;

// Service and HTTP layer
pub mod api;
pub mod config;
pub mod models;
pub mod service;

// Re-export key types for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::ItineraryError;
pub use graph::{FlightGraph, NodeId};
pub use models::{PathRequest, PathResponse, ValidationError};
pub use resolver::{Itinerary, ItineraryResolver};
pub use service::{FlightTracker, ItineraryService};
pub use topology::Topology;
