// Superhero backend endpoint functions.
// Provides typed methods for fetching data from the roster service.

use crate::error::Result;

use super::client::HeroClient;
use super::types::Hero;

impl HeroClient {
    /// Fetch the full superhero roster.
    pub async fn get_superheroes(&self) -> Result<Vec<Hero>> {
        let response = self.get("/superheroes").await?;
        let heroes: Vec<Hero> = response.json().await?;
        Ok(heroes)
    }
}
