use serde::{Deserialize, Serialize};

/// Search origin. Compared by value to decide whether a new search is
/// required, so this is `Copy + PartialEq` rather than a provider handle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }
}
