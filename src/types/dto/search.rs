use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

use crate::places::photo_url;
use crate::price::format_price_tier;
use crate::state::SearchState;
use crate::types::geom::Coordinate;
use crate::types::lodging::LodgingCandidate;

/// Fixed zoom the map renders at.
pub const MAP_ZOOM: u8 = 14;

#[derive(Deserialize, Debug)]
pub struct LocationQuery {
    pub query: String,
}

/// What the browser renders: the list entries and the map markers are built
/// from the same visible prefix of the same result set, so the two can never
/// show different candidates.
#[derive(Serialize, Debug)]
pub struct SearchView {
    pub center: Option<Coordinate>,
    pub zoom: u8,
    pub lodgings: Vec<LodgingEntry>,
    pub markers: Vec<Marker>,
    pub total: usize,
    pub revealed: usize,
    pub has_more: bool,
    pub search_failed: bool,
}

#[derive(Serialize, Debug)]
pub struct LodgingEntry {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub price_range: String,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct Marker {
    pub place_id: String,
    pub name: String,
    pub position: Coordinate,
}

impl SearchView {
    pub fn from_state(state: &SearchState) -> Result<Self> {
        let visible = state.results().visible();
        let lodgings = visible
            .iter()
            .map(LodgingEntry::from_candidate)
            .collect::<Result<Vec<_>>>()?;
        let markers = visible
            .iter()
            .map(|candidate| Marker {
                place_id: candidate.place_id.clone(),
                name: candidate.name.clone(),
                position: candidate.position,
            })
            .collect();
        Ok(SearchView {
            center: state.center(),
            zoom: MAP_ZOOM,
            lodgings,
            markers,
            total: state.results().len(),
            revealed: state.results().revealed_count(),
            has_more: state.results().can_reveal_more(),
            search_failed: state.search_failed(),
        })
    }
}

impl LodgingEntry {
    fn from_candidate(candidate: &LodgingCandidate) -> Result<Self> {
        let photo_url = candidate.photos.first().map(photo_url).transpose()?;
        Ok(LodgingEntry {
            place_id: candidate.place_id.clone(),
            name: candidate.name.clone(),
            address: candidate.vicinity.clone(),
            rating: candidate.rating,
            price_range: format_price_tier(candidate.price_level),
            photo_url,
        })
    }
}
