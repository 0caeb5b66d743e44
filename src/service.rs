// Flight tracking service: the seam between the HTTP layer and the resolver
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::ItineraryError;
use crate::models::PathRequest;
use crate::resolver::{Itinerary, ItineraryResolver};

#[async_trait]
pub trait FlightTracker: Send + Sync + 'static {
    // Reconstruct the itinerary described by an already validated request
    async fn get_flights_path(&self, request: PathRequest) -> Result<Itinerary, ItineraryError>;
}

/// [`FlightTracker`] backed by [`ItineraryResolver`].
///
/// The resolver itself never logs; this is where resolved paths and
/// classification failures are recorded.
#[derive(Debug, Clone, Default)]
pub struct ItineraryService {
    resolver: ItineraryResolver,
}

impl ItineraryService {
    pub fn new() -> Self {
        Self {
            resolver: ItineraryResolver::new(),
        }
    }
}

#[async_trait]
impl FlightTracker for ItineraryService {
    async fn get_flights_path(&self, request: PathRequest) -> Result<Itinerary, ItineraryError> {
        debug!(flights = request.flights.len(), "resolving itinerary");

        // Resolution is CPU-bound; keep it off the async workers.
        let resolver = self.resolver;
        let result = tokio::task::spawn_blocking(move || resolver.resolve(&request.segments()))
            .await
            .map_err(|err| ItineraryError::TaskFailed(err.to_string()))?;

        match result {
            Ok(itinerary) => {
                info!(
                    start = itinerary.start(),
                    end = itinerary.end(),
                    "{}",
                    itinerary
                );
                Ok(itinerary)
            }
            Err(err) if err.is_internal() => {
                tracing::error!(error = %err, "itinerary stages disagree");
                Err(err)
            }
            Err(err) => {
                info!(error = %err, "flights do not form an itinerary");
                Err(err)
            }
        }
    }
}
