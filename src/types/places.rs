use std::fmt;

use serde::{Deserialize, Serialize};

use super::geom::Coordinate;

/// Status codes of the Places web service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacesStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    NotFound,
    #[serde(other)]
    UnknownError,
}

impl fmt::Display for PlacesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            PlacesStatus::Ok => "OK",
            PlacesStatus::ZeroResults => "ZERO_RESULTS",
            PlacesStatus::InvalidRequest => "INVALID_REQUEST",
            PlacesStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            PlacesStatus::RequestDenied => "REQUEST_DENIED",
            PlacesStatus::NotFound => "NOT_FOUND",
            PlacesStatus::UnknownError => "UNKNOWN_ERROR",
        };
        f.write_str(status)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NearbySearchResponse {
    pub status: PlacesStatus,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub geometry: PlaceGeometry,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlaceGeometry {
    pub location: Coordinate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlacePhoto {
    pub photo_reference: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub status: PlacesStatus,
    pub result: Option<PlaceDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlaceDetails {
    #[serde(default)]
    pub price_level: Option<i64>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_response_parses_provider_shape() {
        let raw = serde_json::json!({
            "status": "OK",
            "results": [{
                "place_id": "ChIJabc123",
                "name": "Hotel Arts",
                "vicinity": "119 12 Ave SW, Calgary",
                "rating": 4.3,
                "geometry": { "location": { "lat": 51.0423, "lng": -114.0646 } },
                "photos": [{ "photo_reference": "ref-1", "height": 400, "width": 600 }]
            }]
        });
        let response: NearbySearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.status, PlacesStatus::Ok);
        assert_eq!(response.results.len(), 1);
        let place = &response.results[0];
        assert_eq!(place.place_id, "ChIJabc123");
        assert_eq!(place.photos[0].photo_reference, "ref-1");
        assert_eq!(place.geometry.location, Coordinate::new(51.0423, -114.0646));
    }

    #[test]
    fn zero_results_parses_without_results_field() {
        let raw = serde_json::json!({ "status": "ZERO_RESULTS" });
        let response: NearbySearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.status, PlacesStatus::ZeroResults);
        assert!(response.results.is_empty());
    }

    #[test]
    fn unrecognized_status_falls_back_to_unknown() {
        let raw = serde_json::json!({ "status": "SOMETHING_NEW", "results": [] });
        let response: NearbySearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.status, PlacesStatus::UnknownError);
    }

    #[test]
    fn details_tolerate_missing_enrichment_fields() {
        let raw = serde_json::json!({ "status": "OK", "result": {} });
        let response: PlaceDetailsResponse = serde_json::from_value(raw).unwrap();
        let details = response.result.unwrap();
        assert_eq!(details.price_level, None);
        assert!(details.photos.is_empty());
    }
}
