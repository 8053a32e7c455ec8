// Superhero backend response types.
// Defines structs for deserializing the roster service's JSON.

use serde::{Deserialize, Serialize};

/// A superhero as served by the backend. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Select transform: reduce the raw hero list to display names only,
/// preserving response order. The flat list is the response contract.
pub fn hero_names(heroes: &[Hero]) -> Vec<String> {
    heroes.iter().map(|hero| hero.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_names_keeps_order_and_drops_other_fields() {
        let heroes = vec![
            Hero {
                id: 1,
                name: "Batman".to_string(),
            },
            Hero {
                id: 2,
                name: "Superman".to_string(),
            },
        ];

        assert_eq!(hero_names(&heroes), vec!["Batman", "Superman"]);
    }

    #[test]
    fn test_hero_deserializes_with_extra_fields() {
        let json = r#"{"id": 3, "name": "Wonder Woman", "alterEgo": "Diana Prince"}"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, 3);
        assert_eq!(hero.name, "Wonder Woman");
    }

    #[test]
    fn test_hero_names_empty_list() {
        assert!(hero_names(&[]).is_empty());
    }
}
