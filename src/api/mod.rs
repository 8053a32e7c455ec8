// Superhero backend API module.
// Provides the client and types for the local roster service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::HeroClient;
pub use types::*;
