// App state and main event loop.
// Manages tabs, fetch orchestration, and keyboard input handling.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{Hero, HeroClient};
use crate::query::{QueryCache, STALE_TTL};
use crate::state::{
    ConsoleState, HEROES_QUERY_KEY, HeroesViewState, Route, RqHeroesViewState,
};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    SuperHeroes,
    RqSuperHeroes,
    Console,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::SuperHeroes => "Super Heroes",
            Tab::RqSuperHeroes => "RQ Super Heroes",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::SuperHeroes,
            Tab::SuperHeroes => Tab::RqSuperHeroes,
            Tab::RqSuperHeroes => Tab::Console,
            Tab::Console => Tab::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Home => Tab::Console,
            Tab::SuperHeroes => Tab::Home,
            Tab::RqSuperHeroes => Tab::SuperHeroes,
            Tab::Console => Tab::RqSuperHeroes,
        }
    }
}

/// Completion events sent back from fetch tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// The traditional view's fetch resolved.
    HeroesResolved(Result<Vec<Hero>, String>),
    /// A query-cache fetch settled.
    QuerySettled {
        key: String,
        result: Result<serde_json::Value, String>,
    },
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Traditional heroes view.
    pub heroes: HeroesViewState,
    /// Query-backed heroes view.
    pub rq_heroes: RqHeroesViewState,
    /// Console activity log.
    pub console: ConsoleState,
    /// Process-wide query cache, shared with fetch bookkeeping for the
    /// process lifetime.
    pub queries: Arc<QueryCache>,
    api: HeroClient,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(api: HeroClient) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            active_tab: Tab::default(),
            should_quit: false,
            show_help: false,
            heroes: HeroesViewState::new(),
            rq_heroes: RqHeroesViewState::new(),
            console: ConsoleState::new(),
            queries: Arc::new(QueryCache::new()),
            api,
            events_tx,
            events_rx,
        }
    }

    /// Open the view for a path. Unregistered paths fall back to Home with a
    /// console warning (there is no 404 view).
    pub fn open_route(&mut self, path: &str) {
        match Route::parse(path) {
            Some(route) => {
                if let Route::RqSuperHero { hero_id } = &route {
                    self.rq_heroes.route_hero_id = Some(hero_id.clone());
                }
                self.activate_tab(route.tab());
            }
            None => {
                self.console.log_warn(format!("no route matches {}", path));
                self.activate_tab(Tab::Home);
            }
        }
    }

    /// Switch tabs, running the target view's mount behavior.
    fn activate_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        match tab {
            Tab::SuperHeroes => {
                if self.heroes.needs_fetch() {
                    self.fetch_heroes();
                }
            }
            Tab::RqSuperHeroes => {
                if self.queries.is_stale(HEROES_QUERY_KEY, STALE_TTL) {
                    self.fetch_rq_heroes();
                }
            }
            Tab::Console => self.console.mark_viewed(),
            Tab::Home => {}
        }
    }

    /// Spawn a direct fetch for the traditional view. No cache, no dedup;
    /// every call issues a real request and discards the current list.
    fn fetch_heroes(&mut self) {
        self.heroes.list.set_loading();
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.get_superheroes().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::HeroesResolved(result));
        });
    }

    /// Spawn a fetch through the query cache. Overlapping requests for the
    /// key collapse into the one already in flight.
    fn fetch_rq_heroes(&mut self) {
        if !self.queries.begin(HEROES_QUERY_KEY) {
            return;
        }
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match api.get_superheroes().await {
                Ok(heroes) => serde_json::to_value(&heroes).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(AppEvent::QuerySettled {
                key: HEROES_QUERY_KEY.to_string(),
                result,
            });
        });
    }

    /// Refetch whatever the active view shows.
    fn refresh(&mut self) {
        match self.active_tab {
            Tab::SuperHeroes => self.fetch_heroes(),
            Tab::RqSuperHeroes => self.fetch_rq_heroes(),
            Tab::Home | Tab::Console => {}
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> crate::error::Result<()> {
        while !self.should_quit {
            self.drain_events();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_input()?;
        }
        Ok(())
    }

    /// Apply completed fetch results that arrived since the last tick.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HeroesResolved(result) => {
                match &result {
                    Ok(heroes) => self
                        .console
                        .log_info(format!("fetched {} heroes", heroes.len())),
                    Err(message) => self.console.log_error(message.clone()),
                }
                self.heroes.resolve(result);
            }
            AppEvent::QuerySettled { key, result } => {
                match &result {
                    Ok(_) => self.console.log_info(format!("query '{}' settled", key)),
                    Err(message) => self.console.log_error(message.clone()),
                }
                self.queries.settle(&key, result);
            }
        }
        // The badge counts errors logged while the console is off screen.
        if self.active_tab == Tab::Console {
            self.console.mark_viewed();
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_input(&mut self) -> std::io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.activate_tab(self.active_tab.next()),
            KeyCode::BackTab => self.activate_tab(self.active_tab.prev()),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        match self.active_tab {
            Tab::SuperHeroes => self.heroes.list.select_prev(),
            Tab::RqSuperHeroes => {
                let len = self.rq_names_len();
                self.rq_heroes.select_prev(len);
            }
            Tab::Console => self.console.select_prev(),
            Tab::Home => {}
        }
    }

    fn select_next(&mut self) {
        match self.active_tab {
            Tab::SuperHeroes => self.heroes.list.select_next(),
            Tab::RqSuperHeroes => {
                let len = self.rq_names_len();
                self.rq_heroes.select_next(len);
            }
            Tab::Console => self.console.select_next(),
            Tab::Home => {}
        }
    }

    fn rq_names_len(&self) -> usize {
        self.rq_heroes
            .observe(&self.queries)
            .data
            .map_or(0, |names| names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadingState;

    fn app() -> App {
        App::new(HeroClient::new().unwrap())
    }

    #[test]
    fn test_tab_cycle_covers_all_views() {
        let mut tab = Tab::default();
        for _ in 0..4 {
            assert_eq!(tab.next().prev(), tab);
            tab = tab.next();
        }
        assert_eq!(tab, Tab::default());
    }

    #[test]
    fn test_quit_and_help_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_help);

        // Keys are swallowed while the help overlay is up.
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_open_route_selects_views() {
        let mut app = app();
        app.open_route("/super-heroes");
        assert_eq!(app.active_tab, Tab::SuperHeroes);

        app.open_route("/rq-super-heroes/7");
        assert_eq!(app.active_tab, Tab::RqSuperHeroes);
        assert_eq!(app.rq_heroes.route_hero_id.as_deref(), Some("7"));

        app.open_route("/");
        assert_eq!(app.active_tab, Tab::Home);
    }

    #[tokio::test]
    async fn test_unmatched_route_falls_back_to_home_with_warning() {
        let mut app = app();
        app.open_route("/villains");
        assert_eq!(app.active_tab, Tab::Home);
        assert!(
            app.console
                .messages
                .iter()
                .any(|m| m.message.contains("/villains"))
        );
    }

    #[tokio::test]
    async fn test_entering_traditional_view_starts_a_fetch() {
        let mut app = app();
        app.open_route("/super-heroes");
        assert!(app.heroes.list.data.is_loading());
    }

    #[tokio::test]
    async fn test_entering_query_view_begins_the_query_once() {
        let mut app = app();
        app.open_route("/rq-super-heroes");
        let snap: crate::query::QuerySnapshot<serde_json::Value> =
            app.queries.snapshot(HEROES_QUERY_KEY);
        assert!(snap.is_fetching);

        // Re-entering while in flight does not start another request.
        app.activate_tab(Tab::RqSuperHeroes);
        let snap: crate::query::QuerySnapshot<serde_json::Value> =
            app.queries.snapshot(HEROES_QUERY_KEY);
        assert!(snap.is_fetching);
    }

    #[test]
    fn test_heroes_resolution_updates_view_and_console() {
        let mut app = app();
        app.apply_event(AppEvent::HeroesResolved(Ok(vec![
            Hero {
                id: 1,
                name: "Batman".to_string(),
            },
            Hero {
                id: 2,
                name: "Superman".to_string(),
            },
        ])));

        assert!(app.heroes.list.data.is_loaded());
        assert_eq!(app.console.messages.len(), 1);
        assert_eq!(app.console.unread_errors, 0);
    }

    #[test]
    fn test_failed_fetch_reaches_console_badge() {
        let mut app = app();
        app.apply_event(AppEvent::HeroesResolved(Err(
            "backend request failed: connection refused".to_string(),
        )));

        assert!(matches!(app.heroes.list.data, LoadingState::Error(_)));
        assert_eq!(app.console.unread_errors, 1);

        // Viewing the console clears the badge.
        app.activate_tab(Tab::Console);
        assert_eq!(app.console.unread_errors, 0);
    }

    #[test]
    fn test_query_settle_event_lands_in_cache() {
        let mut app = app();
        app.queries.begin(HEROES_QUERY_KEY);
        app.apply_event(AppEvent::QuerySettled {
            key: HEROES_QUERY_KEY.to_string(),
            result: Ok(serde_json::json!([{ "id": 1, "name": "Batman" }])),
        });

        let snapshot = app.rq_heroes.observe(&app.queries);
        assert_eq!(snapshot.data, Some(vec!["Batman".to_string()]));
        assert!(!snapshot.is_fetching);
    }
}
