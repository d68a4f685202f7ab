use color_eyre::eyre::Result;

use crate::clients::{get_google_api_key, get_places_url, get_reqwest_client};
use crate::errors::SearchError;
use crate::types::geom::Coordinate;
use crate::types::places::{
    NearbySearchResponse, PlaceDetails, PlaceDetailsResponse, PlacePhoto, PlacesStatus,
};

pub const SEARCH_RADIUS_METRES: u32 = 5000;
pub const LODGING_TYPE: &str = "lodging";
pub const PHOTO_MAX_WIDTH: u32 = 400;

/// One nearby-search request around `center`, scoped to lodging.
pub async fn nearby_lodging(center: Coordinate) -> Result<NearbySearchResponse, SearchError> {
    let base = get_places_url().map_err(SearchError::provider)?;
    let key = get_google_api_key().map_err(SearchError::provider)?;
    let response = get_reqwest_client()
        .map_err(SearchError::provider)?
        .get(format!("{base}/nearbysearch/json"))
        .query(&[
            ("location", format!("{},{}", center.lat, center.lng)),
            ("radius", SEARCH_RADIUS_METRES.to_string()),
            ("type", LODGING_TYPE.to_string()),
            ("key", key.clone()),
        ])
        .send()
        .await?
        .json::<NearbySearchResponse>()
        .await?;
    Ok(response)
}

/// One detail fetch for a single place id. Only price tier and photos are
/// requested; everything else already came back with the nearby search.
pub async fn lodging_details(place_id: &str) -> Result<PlaceDetails, SearchError> {
    let base = get_places_url().map_err(SearchError::provider)?;
    let key = get_google_api_key().map_err(SearchError::provider)?;
    let response = get_reqwest_client()
        .map_err(SearchError::provider)?
        .get(format!("{base}/details/json"))
        .query(&[
            ("place_id", place_id.to_string()),
            ("fields", "price_level,photos".to_string()),
            ("key", key.clone()),
        ])
        .send()
        .await?
        .json::<PlaceDetailsResponse>()
        .await?;
    details_from_response(response)
}

/// A non-OK details status is a provider-side failure for that one place;
/// `Unavailable` stays reserved for the nearby search itself.
fn details_from_response(response: PlaceDetailsResponse) -> Result<PlaceDetails, SearchError> {
    match (response.status, response.result) {
        (PlacesStatus::Ok, Some(details)) => Ok(details),
        (PlacesStatus::Ok, None) => Err(SearchError::provider("details response missing result")),
        (status, _) => Err(SearchError::provider(format!(
            "place details status {status}"
        ))),
    }
}

/// Resolve a photo reference to a displayable image URL.
pub fn photo_url(photo: &PlacePhoto) -> Result<String> {
    Ok(format!(
        "{}/photo?maxwidth={}&photo_reference={}&key={}",
        get_places_url()?,
        PHOTO_MAX_WIDTH,
        photo.photo_reference,
        get_google_api_key()?
    ))
}
