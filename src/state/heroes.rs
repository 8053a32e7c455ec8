// Traditional heroes view state.
// The fetch lifecycle is managed by hand: every refresh issues a real
// request and the previous list is discarded while it is in flight.

use ratatui::widgets::ListState;

use crate::api::Hero;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i >= items.len() - 1 {
                        i // Stay at end
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i == 0 {
                        0 // Stay at start
                    } else {
                        i - 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.data.data()?.get(index)
    }

    /// Reset selection to the first item.
    pub fn reset_selection(&mut self) {
        if let Some(items) = self.data.data() {
            if !items.is_empty() {
                self.list_state.select(Some(0));
            } else {
                self.list_state.select(None);
            }
        } else {
            self.list_state.select(None);
        }
    }

    /// Set loaded data.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        self.data = LoadingState::Loaded(items);
        self.reset_selection();
    }

    /// Set loading state. Any previous data is discarded.
    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
        self.list_state.select(None);
    }

    /// Set error state.
    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }
}

/// Complete state for the traditional heroes view.
#[derive(Debug, Default)]
pub struct HeroesViewState {
    pub list: SelectableList<Hero>,
}

impl HeroesViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether entering the view should trigger the initial fetch.
    pub fn needs_fetch(&self) -> bool {
        matches!(self.list.data, LoadingState::Idle)
    }

    /// Record the outcome of a fetch.
    pub fn resolve(&mut self, result: Result<Vec<Hero>, String>) {
        match result {
            Ok(heroes) => self.list.set_loaded(heroes),
            Err(message) => self.list.set_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heroes() -> Vec<Hero> {
        vec![
            Hero {
                id: 1,
                name: "Batman".to_string(),
            },
            Hero {
                id: 2,
                name: "Superman".to_string(),
            },
        ]
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut list = SelectableList::new();
        list.set_loaded(heroes());
        assert_eq!(list.selected(), Some(0));

        list.select_prev();
        assert_eq!(list.selected(), Some(0));

        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(1));

        assert_eq!(list.selected_item().map(|h: &Hero| h.name.as_str()), Some("Superman"));
    }

    #[test]
    fn test_refresh_discards_loaded_data() {
        let mut view = HeroesViewState::new();
        view.resolve(Ok(heroes()));
        assert!(view.list.data.is_loaded());

        // A new request in flight must not render stale entries.
        view.list.set_loading();
        assert!(view.list.data.is_loading());
        assert!(view.list.data.data().is_none());
        assert_eq!(view.list.selected(), None);
    }

    #[test]
    fn test_error_stores_the_message() {
        let mut view = HeroesViewState::new();
        view.resolve(Err("backend request failed: connection refused".to_string()));

        match &view.list.data {
            LoadingState::Error(message) => {
                assert_eq!(message, "backend request failed: connection refused");
            }
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn test_needs_fetch_only_when_idle() {
        let mut view = HeroesViewState::new();
        assert!(view.needs_fetch());

        view.list.set_loading();
        assert!(!view.needs_fetch());

        view.resolve(Ok(heroes()));
        assert!(!view.needs_fetch());
    }
}
