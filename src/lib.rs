pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod steps;
pub mod surface;
pub mod view;

pub use board::{Board, Message, Selection, Update};
pub use config::BoardConfig;
pub use error::BoardError;
pub use model::{Difficulty, Recipe, RecipeId, Step};
pub use pipeline::{visible, Filter, Sort};
pub use surface::{App, MemorySurface, Surface};
pub use view::{CardVisibility, Section};

/// Board over the built-in recipes, showing all of them unsorted.
pub fn builtin_board() -> Result<Board, BoardError> {
    Ok(Board::new(catalog::builtin()?))
}
