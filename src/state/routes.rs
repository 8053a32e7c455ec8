// Route table for the application's addressable views.
// Maps path strings onto tabs.

use crate::app::Tab;

/// An addressable view, parsed from a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/super-heroes`, fetch state managed by hand.
    SuperHeroes,
    /// `/rq-super-heroes`, fetches routed through the query cache.
    RqSuperHeroes,
    /// `/rq-super-heroes/:heroId`. The id segment is accepted and carried,
    /// but the view does not consume it.
    RqSuperHero { hero_id: String },
}

impl Route {
    /// Parse a path into a route. Unregistered paths match nothing.
    pub fn parse(path: &str) -> Option<Route> {
        let path = match path {
            "/" => "/",
            other => other.trim_end_matches('/'),
        };

        match path {
            "/" => Some(Route::Home),
            "/super-heroes" => Some(Route::SuperHeroes),
            "/rq-super-heroes" => Some(Route::RqSuperHeroes),
            _ => {
                let hero_id = path.strip_prefix("/rq-super-heroes/")?;
                if hero_id.is_empty() || hero_id.contains('/') {
                    return None;
                }
                Some(Route::RqSuperHero {
                    hero_id: hero_id.to_string(),
                })
            }
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SuperHeroes => "/super-heroes".to_string(),
            Route::RqSuperHeroes => "/rq-super-heroes".to_string(),
            Route::RqSuperHero { hero_id } => format!("/rq-super-heroes/{}", hero_id),
        }
    }

    /// The tab that renders this route.
    pub fn tab(&self) -> Tab {
        match self {
            Route::Home => Tab::Home,
            Route::SuperHeroes => Tab::SuperHeroes,
            Route::RqSuperHeroes | Route::RqSuperHero { .. } => Tab::RqSuperHeroes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/super-heroes"), Some(Route::SuperHeroes));
        assert_eq!(Route::parse("/rq-super-heroes"), Some(Route::RqSuperHeroes));
        assert_eq!(
            Route::parse("/rq-super-heroes/7"),
            Some(Route::RqSuperHero {
                hero_id: "7".to_string()
            })
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/super-heroes/"), Some(Route::SuperHeroes));
    }

    #[test]
    fn test_unregistered_paths_match_nothing() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/villains"), None);
        assert_eq!(Route::parse("/rq-super-heroes/7/powers"), None);
        assert_eq!(Route::parse("super-heroes"), None);
    }

    #[test]
    fn test_tab_mapping() {
        assert_eq!(Route::Home.tab(), Tab::Home);
        assert_eq!(Route::SuperHeroes.tab(), Tab::SuperHeroes);
        assert_eq!(Route::RqSuperHeroes.tab(), Tab::RqSuperHeroes);
        // The hero id route renders the same view; the id is not consumed.
        assert_eq!(
            Route::RqSuperHero {
                hero_id: "7".to_string()
            }
            .tab(),
            Tab::RqSuperHeroes
        );
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::SuperHeroes,
            Route::RqSuperHeroes,
            Route::RqSuperHero {
                hero_id: "7".to_string(),
            },
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
