// Query-backed heroes view state.
// The data itself lives in the query cache; the view holds only its cache
// key, a list cursor, and the route parameter it was opened with.

use ratatui::widgets::ListState;

use crate::api::{Hero, hero_names};
use crate::query::{QueryCache, QuerySnapshot};

/// Cache tag for the superhero roster query.
pub const HEROES_QUERY_KEY: &str = "super-heroes";

/// State for the query-backed heroes view.
#[derive(Debug, Default)]
pub struct RqHeroesViewState {
    pub list_state: ListState,
    /// Hero id from the `/rq-super-heroes/:heroId` route. Carried but not
    /// consumed by the view.
    pub route_hero_id: Option<String>,
}

impl RqHeroesViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the roster query, applying the name-select transform.
    pub fn observe(&self, cache: &QueryCache) -> QuerySnapshot<Vec<String>> {
        let snapshot: QuerySnapshot<Vec<Hero>> = cache.snapshot(HEROES_QUERY_KEY);
        QuerySnapshot {
            status: snapshot.status,
            data: snapshot.data.map(|heroes| hero_names(&heroes)),
            error: snapshot.error,
            is_fetching: snapshot.is_fetching,
            updated_at: snapshot.updated_at,
        }
    }

    /// Select the next name, clamped to the list length.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous name.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStatus;

    fn settled_cache() -> QueryCache {
        let cache = QueryCache::new();
        cache.begin(HEROES_QUERY_KEY);
        cache.settle(
            HEROES_QUERY_KEY,
            Ok(serde_json::json!([
                { "id": 1, "name": "Batman" },
                { "id": 2, "name": "Superman" }
            ])),
        );
        cache
    }

    #[test]
    fn test_observe_applies_name_select() {
        let cache = settled_cache();
        let view = RqHeroesViewState::new();

        let snapshot = view.observe(&cache);
        assert_eq!(snapshot.status, QueryStatus::Success);
        assert_eq!(
            snapshot.data,
            Some(vec!["Batman".to_string(), "Superman".to_string()])
        );
    }

    #[test]
    fn test_observe_passes_error_through() {
        let cache = QueryCache::new();
        cache.begin(HEROES_QUERY_KEY);
        cache.settle(HEROES_QUERY_KEY, Err("HTTP 500: boom".to_string()));

        let view = RqHeroesViewState::new();
        let snapshot = view.observe(&cache);
        assert!(snapshot.is_error());
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 500: boom"));
    }

    #[test]
    fn test_refetch_reports_fetching_over_warm_data() {
        let cache = settled_cache();
        cache.begin(HEROES_QUERY_KEY);

        let view = RqHeroesViewState::new();
        let snapshot = view.observe(&cache);
        assert!(snapshot.is_fetching);
        assert!(!snapshot.is_loading());
    }

    #[test]
    fn test_selection_clamps() {
        let mut view = RqHeroesViewState::new();

        view.select_next(0);
        assert_eq!(view.list_state.selected(), None);

        view.select_next(2);
        view.select_next(2);
        view.select_next(2);
        assert_eq!(view.list_state.selected(), Some(1));

        view.select_prev(2);
        view.select_prev(2);
        assert_eq!(view.list_state.selected(), Some(0));
    }
}
