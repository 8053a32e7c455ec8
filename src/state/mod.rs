// State management module.
// Routes and per-view data state.

#![allow(dead_code)]

pub mod console;
pub mod heroes;
pub mod routes;
pub mod rq_heroes;

pub use console::{ConsoleLevel, ConsoleState};
pub use heroes::{HeroesViewState, LoadingState, SelectableList};
pub use routes::Route;
pub use rq_heroes::{HEROES_QUERY_KEY, RqHeroesViewState};
