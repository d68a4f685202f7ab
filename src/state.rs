use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::Mutex;

use crate::errors::SearchError;
use crate::types::geom::Coordinate;
use crate::types::lodging::LodgingCandidate;

pub const PAGE_SIZE: usize = 5;

static SEARCH_STATE: OnceLock<Mutex<SearchState>> = OnceLock::new();

pub fn init_search_state() -> Result<()> {
    SEARCH_STATE
        .set(Mutex::new(SearchState::new()))
        .map_err(|_| eyre!("Search state already initialized"))
}

pub fn get_search_state() -> Result<&'static Mutex<SearchState>> {
    SEARCH_STATE.get().ok_or(eyre!("Failed to get search state"))
}

/// Ordered lodging candidates (provider rank, fixed at creation) plus the
/// reveal cursor. The cursor starts at one page, only grows, and never
/// exceeds the candidate count.
#[derive(Debug)]
pub struct ResultSet {
    candidates: Vec<LodgingCandidate>,
    revealed: usize,
}

impl ResultSet {
    pub fn new(candidates: Vec<LodgingCandidate>) -> Self {
        let revealed = PAGE_SIZE.min(candidates.len());
        ResultSet {
            candidates,
            revealed,
        }
    }

    pub fn empty() -> Self {
        ResultSet::new(vec![])
    }

    /// The prefix both the list and the map markers render.
    pub fn visible(&self) -> &[LodgingCandidate] {
        &self.candidates[..self.revealed]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn can_reveal_more(&self) -> bool {
        self.revealed < self.candidates.len()
    }

    /// Advance the cursor by one page, clamped to the end of the set.
    /// Revealing past the end is harmless.
    pub fn reveal_more(&mut self) {
        self.revealed = self.candidates.len().min(self.revealed + PAGE_SIZE);
    }
}

/// The one mutable record behind the UI: current search origin, its results,
/// and the generation marker that keeps superseded pipeline runs from
/// clobbering newer ones. Only the transition methods below mutate it.
#[derive(Debug)]
pub struct SearchState {
    center: Option<Coordinate>,
    results: ResultSet,
    search_failed: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        SearchState {
            center: None,
            results: ResultSet::empty(),
            search_failed: false,
            generation: 0,
        }
    }

    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn search_failed(&self) -> bool {
        self.search_failed
    }

    /// Start a search for `center`. Returns the generation to complete with,
    /// or `None` when the origin is unchanged by value and no re-run is due.
    pub fn search_started(&mut self, center: Coordinate) -> Option<u64> {
        if self.center == Some(center) {
            return None;
        }
        self.center = Some(center);
        self.generation += 1;
        Some(self.generation)
    }

    /// Apply a finished pipeline run. A stale generation is a no-op: the run
    /// was superseded while in flight and its outcome is discarded. Returns
    /// whether the outcome was applied.
    pub fn search_completed(
        &mut self,
        generation: u64,
        outcome: Result<Vec<LodgingCandidate>, SearchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match outcome {
            Ok(candidates) => {
                self.results = ResultSet::new(candidates);
                self.search_failed = false;
            }
            Err(_) => {
                self.results = ResultSet::empty();
                self.search_failed = true;
            }
        }
        true
    }

    pub fn reveal_more(&mut self) {
        self.results.reveal_more();
    }
}
