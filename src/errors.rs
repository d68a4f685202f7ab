use std::fmt::Display;

use thiserror::Error;

use crate::types::places::PlacesStatus;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("no coordinate matches the location query")]
    LocationNotFound,
    #[error("geocoding provider error: {0}")]
    Provider(String),
}

impl GeocodeError {
    pub fn provider(err: impl Display) -> Self {
        GeocodeError::Provider(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("nearby search unavailable, provider status {0}")]
    Unavailable(PlacesStatus),
    #[error("places provider error: {0}")]
    Provider(String),
}

impl SearchError {
    pub fn provider(err: impl Display) -> Self {
        SearchError::Provider(err.to_string())
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::provider(err)
    }
}
