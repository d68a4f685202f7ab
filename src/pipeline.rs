use std::future::Future;

use futures::{stream, StreamExt};
use tracing::{debug, instrument};

use crate::errors::SearchError;
use crate::places;
use crate::types::geom::Coordinate;
use crate::types::lodging::LodgingCandidate;
use crate::types::places::{NearbySearchResponse, PlaceDetails, PlacesStatus};

const DETAIL_CONCURRENCY: usize = 10;

/// Run the full enrichment pipeline for one search origin: nearby search,
/// then a detail fetch per candidate. Zero provider matches yield an empty
/// list; any other non-OK search status is an error.
#[instrument]
pub async fn search_lodging(center: Coordinate) -> Result<Vec<LodgingCandidate>, SearchError> {
    let response = places::nearby_lodging(center).await?;
    enrich_candidates(response, |place_id| async move {
        places::lodging_details(&place_id).await
    })
    .await
}

/// Fan the detail fetches out over the nearby-search results and join them.
/// `buffered` keeps nearby-search rank: detail latency never reorders the
/// output, and nothing is returned until every fetch has resolved. A failed
/// fetch downgrades that one candidate to its search-time fields.
async fn enrich_candidates<F, Fut>(
    response: NearbySearchResponse,
    fetch_details: F,
) -> Result<Vec<LodgingCandidate>, SearchError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<PlaceDetails, SearchError>>,
{
    match response.status {
        PlacesStatus::Ok => {}
        PlacesStatus::ZeroResults => return Ok(vec![]),
        status => return Err(SearchError::Unavailable(status)),
    }
    let candidates = stream::iter(response.results.into_iter().map(LodgingCandidate::from))
        .map(|candidate| {
            let details = fetch_details(candidate.place_id.clone());
            async move {
                match details.await {
                    Ok(details) => candidate.merge_details(details),
                    Err(err) => {
                        debug!(place_id = %candidate.place_id, "detail fetch failed: {err}");
                        candidate
                    }
                }
            }
        })
        .buffered(DETAIL_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::types::places::{NearbyPlace, PlaceGeometry, PlacePhoto};

    fn place(id: &str) -> NearbyPlace {
        NearbyPlace {
            place_id: id.to_string(),
            name: format!("Lodging {id}"),
            vicinity: "somewhere nearby".to_string(),
            rating: Some(4.0),
            geometry: PlaceGeometry {
                location: Coordinate::new(51.05, -114.07),
            },
            photos: vec![PlacePhoto {
                photo_reference: format!("search-{id}"),
            }],
        }
    }

    fn search_response(ids: &[&str]) -> NearbySearchResponse {
        NearbySearchResponse {
            status: PlacesStatus::Ok,
            results: ids.iter().map(|id| place(id)).collect(),
        }
    }

    #[tokio::test]
    async fn detail_latency_does_not_reorder_candidates() {
        let response = search_response(&["a", "b", "c", "d"]);
        // First candidates get the slowest fetches.
        let enriched = enrich_candidates(response, |place_id| async move {
            let delay = match place_id.as_str() {
                "a" => 40,
                "b" => 30,
                "c" => 20,
                _ => 1,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(PlaceDetails {
                price_level: Some(1),
                photos: vec![],
            })
        })
        .await
        .unwrap();
        let order: Vec<&str> = enriched.iter().map(|c| c.place_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn failed_detail_fetch_keeps_candidate_at_rank() {
        let response = search_response(&["a", "b", "c"]);
        let enriched = enrich_candidates(response, |place_id| async move {
            if place_id == "b" {
                Err(SearchError::Unavailable(PlacesStatus::NotFound))
            } else {
                Ok(PlaceDetails {
                    price_level: Some(3),
                    photos: vec![PlacePhoto {
                        photo_reference: format!("detail-{place_id}"),
                    }],
                })
            }
        })
        .await
        .unwrap();
        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].price_level, Some(3));
        // The failed candidate keeps its search-time fields.
        assert_eq!(enriched[1].place_id, "b");
        assert_eq!(enriched[1].price_level, None);
        assert_eq!(enriched[1].photos[0].photo_reference, "search-b");
        assert_eq!(enriched[2].photos[0].photo_reference, "detail-c");
    }

    async fn no_fetch(_place_id: String) -> Result<PlaceDetails, SearchError> {
        panic!("no detail fetch should run")
    }

    #[tokio::test]
    async fn zero_results_is_empty_not_an_error() {
        let response = NearbySearchResponse {
            status: PlacesStatus::ZeroResults,
            results: vec![],
        };
        let enriched = enrich_candidates(response, no_fetch).await.unwrap();
        assert!(enriched.is_empty());
    }

    #[tokio::test]
    async fn non_ok_search_status_is_unavailable() {
        let response = NearbySearchResponse {
            status: PlacesStatus::OverQueryLimit,
            results: vec![],
        };
        let result = enrich_candidates(response, no_fetch).await;
        assert!(matches!(
            result,
            Err(SearchError::Unavailable(PlacesStatus::OverQueryLimit))
        ));
    }
}
