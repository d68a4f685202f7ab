use google_maps::LatLng;
use num_traits::ToPrimitive;

use crate::clients::get_google_maps;
use crate::errors::GeocodeError;
use crate::types::geom::Coordinate;

/// Resolve a free-text location query to a coordinate. Zero provider matches
/// surface as `LocationNotFound`; transport or parse failures as `Provider`.
/// The caller keeps its previous coordinate on either.
pub async fn geocode(query: &str) -> Result<Coordinate, GeocodeError> {
    let response = get_google_maps()
        .map_err(GeocodeError::provider)?
        .geocoding()
        .with_address(query)
        .execute()
        .await
        .map_err(GeocodeError::provider)?;
    let geocoding = response
        .results
        .first()
        .ok_or(GeocodeError::LocationNotFound)?;
    to_coordinate(&geocoding.geometry.location)
}

fn to_coordinate(latlng: &LatLng) -> Result<Coordinate, GeocodeError> {
    match (latlng.lat.to_f64(), latlng.lng.to_f64()) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)),
        _ => Err(GeocodeError::provider("non-numeric coordinate in response")),
    }
}
