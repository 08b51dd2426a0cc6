//! Search history derived from the issued request URLs

use hn_search_client::SearchUrl;

/// Number of prior searches shown in the history bar
pub const MAX_LAST_SEARCHES: usize = 5;

/// Prior distinct searches, oldest first
///
/// Consecutive repeats of a term count once, the most recent term (the
/// current search) is excluded and at most [`MAX_LAST_SEARCHES`] remain.
pub fn last_searches(urls: &[SearchUrl]) -> Vec<String> {
    let mut collapsed: Vec<&str> = Vec::with_capacity(urls.len());
    for term in urls.iter().map(SearchUrl::search_term) {
        if collapsed.last() != Some(&term) {
            collapsed.push(term);
        }
    }

    let window_start = collapsed.len().saturating_sub(MAX_LAST_SEARCHES + 1);
    let mut window = &collapsed[window_start..];
    if let Some((_current, prior)) = window.split_last() {
        window = prior;
    }

    window.iter().map(|term| term.to_string()).collect()
}
