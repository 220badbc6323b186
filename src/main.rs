use log::{debug, warn};
use std::io::{self, BufRead, IsTerminal, Write};

use recipe_board::{builtin_board, App, BoardConfig, BoardError, MemorySurface, Message};

fn main() -> Result<(), BoardError> {
    env_logger::init();

    let config = BoardConfig::load()?;
    debug!("{:#?}", config);

    let board = builtin_board()?;
    let mut app = App::mount(board, Some(MemorySurface::default()))?;

    // Events are only read when piped in, one per line
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Message>() {
                Ok(message) => {
                    if let Err(e) = app.dispatch(message) {
                        warn!("{}", e);
                    }
                }
                Err(e) => warn!("{}", e),
            }
        }
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", app.document(&config.title, &config.container_id))?;

    Ok(())
}
