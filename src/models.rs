// Request and response bodies for the path endpoint
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolver::Itinerary;

pub const AIRPORT_CODE_LEN: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: flights")]
    MissingFlights,

    #[error("Too many flights: {actual} (max {max})")]
    TooManyFlights { max: usize, actual: usize },

    #[error("Flight {index} must contain exactly 2 airports, got {len}")]
    InvalidSegment { index: usize, len: usize },

    #[error("Flight {index} has invalid airport code {code:?}: each airport must have exactly 3 characters and no spaces")]
    InvalidAirportCode { index: usize, code: String },
}

// Incoming body: {"flights": [["SFO", "ATL"], ...]}
// Pairs are kept as plain lists so shape problems surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathRequest {
    #[serde(default)]
    pub flights: Vec<Vec<String>>,
}

impl PathRequest {
    pub fn new<S: Into<String>>(flights: impl IntoIterator<Item = (S, S)>) -> Self {
        Self {
            flights: flights
                .into_iter()
                .map(|(from, to)| vec![from.into(), to.into()])
                .collect(),
        }
    }

    /// Check every flight is a pair of 3-character, whitespace-free codes.
    pub fn validate(&self, max_flights: usize) -> Result<(), ValidationError> {
        if self.flights.is_empty() {
            return Err(ValidationError::MissingFlights);
        }
        if self.flights.len() > max_flights {
            return Err(ValidationError::TooManyFlights {
                max: max_flights,
                actual: self.flights.len(),
            });
        }

        for (index, flight) in self.flights.iter().enumerate() {
            if flight.len() != 2 {
                return Err(ValidationError::InvalidSegment {
                    index,
                    len: flight.len(),
                });
            }
            if let Some(code) = flight.iter().find(|code| !is_airport_code(code)) {
                return Err(ValidationError::InvalidAirportCode {
                    index,
                    code: code.clone(),
                });
            }
        }

        Ok(())
    }

    // Only meaningful after `validate` succeeded
    pub fn segments(&self) -> Vec<(&str, &str)> {
        self.flights
            .iter()
            .filter(|flight| flight.len() == 2)
            .map(|flight| (flight[0].as_str(), flight[1].as_str()))
            .collect()
    }
}

fn is_airport_code(code: &str) -> bool {
    code.chars().count() == AIRPORT_CODE_LEN && !code.chars().any(char::is_whitespace)
}

// Outgoing body: {"start": "SFO", "end": "EWR", "path": ["SFO", ..., "EWR"]}
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathResponse {
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
}

impl From<Itinerary> for PathResponse {
    fn from(itinerary: Itinerary) -> Self {
        Self {
            start: itinerary.start().to_string(),
            end: itinerary.end().to_string(),
            path: itinerary.path,
        }
    }
}
