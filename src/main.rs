// Terminal bootstrap for herodex.
// Sets up the terminal, opens the initial route, and restores on exit.

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

mod api;
mod app;
mod error;
mod query;
mod state;
mod ui;

use api::HeroClient;
use app::App;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional initial route, e.g. `herodex /super-heroes`.
    let initial_route = std::env::args().nth(1);

    let mut app = App::new(HeroClient::new()?);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.open_route(initial_route.as_deref().unwrap_or("/"));
    let result = app.run(&mut terminal).await;

    // Restore the terminal even when the loop exits with an error.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
