mod clients;
mod errors;
mod geocode;
mod net;
mod pipeline;
mod places;
mod price;
mod state;
mod types;

use axum::{
    routing::{get, post},
    Json, Router,
};
use clients::{GMAPS, GOOGLE_API_KEY, PLACES_URL, REQWEST};
use errors::GeocodeError;
use google_maps::GoogleMapsClient;
use net::response::{ResponseError, Result};
use state::{get_search_state, init_search_state};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use types::dto::search::{LocationQuery, SearchView};
use types::geom::Coordinate;

const DEFAULT_PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    init_google_maps()?;
    init_reqwest_client()?;
    init_search_state()?;

    let app = Router::new()
        .route("/location", post(submit_location))
        .route("/center", post(recenter))
        .route("/reveal", post(reveal_more))
        .route("/results", get(get_results))
        .layer(CorsLayer::permissive());

    info!("Running on port 3000");

    axum::Server::bind(&"0.0.0.0:3000".parse().unwrap())
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_google_maps() -> color_eyre::Result<()> {
    let google_api_key = std::env::var("LODGESCOUT_GOOGLE_API_KEY")?;
    let places_url = std::env::var("LODGESCOUT_PLACES_URL")
        .unwrap_or_else(|_| DEFAULT_PLACES_URL.to_string());
    let google_maps_client = GoogleMapsClient::new(&google_api_key);
    GMAPS.set(google_maps_client).unwrap();
    PLACES_URL.set(places_url).unwrap();
    GOOGLE_API_KEY.set(google_api_key).unwrap();
    Ok(())
}

fn init_reqwest_client() -> color_eyre::Result<()> {
    let client = reqwest::Client::new();
    REQWEST.set(client).unwrap();
    Ok(())
}

/// "Location submitted" event. A geocoding failure keeps the previous
/// coordinate and result set in effect; the map simply does not move.
#[axum::debug_handler]
async fn submit_location(Json(input): Json<LocationQuery>) -> Result<Json<SearchView>> {
    let query = input.query.trim();
    if query.is_empty() {
        return Err(ResponseError::bad_request("location query must not be empty"));
    }
    run_search(geocode::geocode(query).await).await
}

/// Map re-center event: the submitted coordinate becomes the authoritative
/// search origin.
async fn recenter(Json(center): Json<Coordinate>) -> Result<Json<SearchView>> {
    run_search(Ok(center)).await
}

/// "Reveal more requested" event.
async fn reveal_more() -> Result<Json<SearchView>> {
    let mut search_state = get_search_state()?.lock().await;
    search_state.reveal_more();
    Ok(Json(SearchView::from_state(&search_state)?))
}

async fn get_results() -> Result<Json<SearchView>> {
    current_view().await
}

async fn run_search(
    geocoded: std::result::Result<Coordinate, GeocodeError>,
) -> Result<Json<SearchView>> {
    let (center, generation) = {
        let mut search_state = get_search_state()?.lock().await;
        match start_search(geocoded, &mut search_state) {
            Some(started) => started,
            None => return Ok(Json(SearchView::from_state(&search_state)?)),
        }
    };
    // The pipeline runs outside the lock; a hung provider call stalls only
    // this run. If a newer search finishes first, this generation is stale
    // and search_completed discards the outcome.
    let outcome = pipeline::search_lodging(center).await;
    if let Err(err) = &outcome {
        warn!("lodging search failed: {err}");
    }
    let mut search_state = get_search_state()?.lock().await;
    search_state.search_completed(generation, outcome);
    Ok(Json(SearchView::from_state(&search_state)?))
}

async fn current_view() -> Result<Json<SearchView>> {
    let search_state = get_search_state()?.lock().await;
    Ok(Json(SearchView::from_state(&search_state)?))
}

/// Decide whether a submitted location starts a pipeline run. A geocode
/// failure leaves the state completely untouched, and an unchanged origin
/// starts no new generation; either way the caller serves the current view.
fn start_search(
    geocoded: std::result::Result<Coordinate, GeocodeError>,
    search_state: &mut state::SearchState,
) -> Option<(Coordinate, u64)> {
    match geocoded {
        Ok(center) => {
            let generation = search_state.search_started(center)?;
            Some((center, generation))
        }
        Err(err) => {
            warn!("geocoding failed, keeping current location: {err}");
            None
        }
    }
}
