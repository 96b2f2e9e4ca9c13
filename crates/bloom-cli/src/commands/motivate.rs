use std::cell::RefCell;

use bloom_core::{Config, GeminiClient, MotivationProvider, QuoteBoard};

use super::open_app;

/// Fetches one phrase for the current habits and prints it.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;
    let config = Config::load()?;

    let client = GeminiClient::new(&config.motivation, Config::api_key())?;
    let provider = MotivationProvider::new(client, &config.motivation);

    let board = RefCell::new(QuoteBoard::new());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(provider.refresh(&board, &app.habit_names()));

    if let Some(quote) = board.borrow().current() {
        println!("{quote}");
    }
    Ok(())
}
