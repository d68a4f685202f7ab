use serde::{Deserialize, Serialize};

use super::geom::Coordinate;
use super::places::{NearbyPlace, PlaceDetails, PlacePhoto};

/// One lodging result, in provider rank order. Built from a nearby-search
/// entry, enriched at most once by `merge_details`, then read-only.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LodgingCandidate {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub photos: Vec<PlacePhoto>,
    pub position: Coordinate,
}

impl LodgingCandidate {
    /// Merge in the detail-fetch fields. The detail response replaces the
    /// search-time photo list outright; a details payload without photos
    /// leaves the candidate photo-less.
    pub fn merge_details(mut self, details: PlaceDetails) -> Self {
        self.price_level = details.price_level;
        self.photos = details.photos;
        self
    }
}

impl From<NearbyPlace> for LodgingCandidate {
    fn from(place: NearbyPlace) -> Self {
        LodgingCandidate {
            place_id: place.place_id,
            name: place.name,
            vicinity: place.vicinity,
            rating: place.rating,
            price_level: None,
            photos: place.photos,
            position: place.geometry.location,
        }
    }
}
