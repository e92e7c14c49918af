//! Session-setup fetch stage: builds the [`CategoryPool`] from the remote API.

use gloo::net::http::Request;
use riesgo_core::{Category, CategoryPool, Clue, ClueCount};
use riesgo_protocol::ApiCategory;

/// Base URL of the trivia API.
const API_BASE: &str = "https://rithm-jeopardy.herokuapp.com/api";

/// Candidate category ids probed on every session start. Some ids in the
/// range are known to fail on the server side; those are skipped.
const CANDIDATE_IDS: std::ops::RangeInclusive<u32> = 2..=19;

/// Fetch every candidate category. Individual failures only shrink the pool;
/// whether the result is big enough to play is the caller's call.
pub(crate) async fn fetch_pool(clues_per_category: ClueCount) -> CategoryPool {
    let mut pool = CategoryPool::new();

    for id in CANDIDATE_IDS {
        match fetch_category(id).await {
            Ok(api_category) => {
                if let Some(category) = adapt_category(api_category, clues_per_category) {
                    pool.insert(category);
                }
            }
            Err(err) => log::warn!("failed to fetch category {}: {}", id, err),
        }
    }

    log::debug!("pooled {} categories", pool.len());
    pool
}

async fn fetch_category(id: u32) -> Result<ApiCategory, gloo::net::Error> {
    let url = format!("{}/category?id={}", API_BASE, id);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(gloo::net::Error::GlooError(format!(
            "status {}",
            response.status()
        )));
    }
    response.json().await
}

/// Clamp an API category to the board's clue count; a category that cannot
/// fill a whole column is dropped.
fn adapt_category(api: ApiCategory, clues_per_category: ClueCount) -> Option<Category> {
    let want = usize::from(clues_per_category);
    if api.clues.len() < want {
        log::warn!(
            "category {} ({:?}) has {} clues, need {}",
            api.id,
            api.title,
            api.clues.len(),
            want
        );
        return None;
    }

    let clues = api
        .clues
        .into_iter()
        .take(want)
        .map(|clue| Clue::new(clue.id, clue.question, clue.answer))
        .collect();
    Some(Category::new(api.id, api.title, clues))
}
