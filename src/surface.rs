use log::info;
use std::collections::HashMap;

use crate::board::{Board, Message, Update};
use crate::error::BoardError;
use crate::model::RecipeId;
use crate::view::{self, Section};

/// Where rendered markup ends up
pub trait Surface {
    fn set_controls(&mut self, html: &str);

    fn replace_list(&mut self, html: &str);

    fn set_section(&mut self, id: RecipeId, section: Section, visible: bool, label: &str);
}

/// In-memory surface holding the latest markup and section states
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub controls: String,
    pub list: String,
    pub sections: HashMap<(RecipeId, Section), (bool, String)>,
    pub repaints: usize,
}

impl MemorySurface {
    pub fn section(&self, id: RecipeId, section: Section) -> Option<(bool, &str)> {
        self.sections
            .get(&(id, section))
            .map(|(visible, label)| (*visible, label.as_str()))
    }
}

impl Surface for MemorySurface {
    fn set_controls(&mut self, html: &str) {
        self.controls = html.to_string();
    }

    fn replace_list(&mut self, html: &str) {
        self.list = html.to_string();
        self.sections.clear();
        self.repaints += 1;
    }

    fn set_section(&mut self, id: RecipeId, section: Section, visible: bool, label: &str) {
        self.sections.insert((id, section), (visible, label.to_string()));
    }
}

/// A board bound to the surface it paints on
pub struct App<S: Surface> {
    board: Board,
    surface: S,
}

impl<S: Surface> App<S> {
    /// Paint the initial state. A missing surface is a fatal setup error.
    pub fn mount(board: Board, surface: Option<S>) -> Result<Self, BoardError> {
        let mut surface = surface.ok_or(BoardError::MissingSurface)?;
        info!("Recipe board initializing with {} recipes", board.recipes().len());

        surface.set_controls(&board.render_controls());
        surface.replace_list(&board.render_list());

        Ok(App { board, surface })
    }

    pub fn dispatch(&mut self, message: Message) -> Result<(), BoardError> {
        match self.board.update(message)? {
            Update::List { controls, html } => {
                self.surface.set_controls(&controls);
                self.surface.replace_list(&html);
            }
            Update::Section {
                id,
                section,
                visible,
                label,
            } => self.surface.set_section(id, section, visible, &label),
        }
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Standalone document reflecting the current board state
    pub fn document(&self, title: &str, container_id: &str) -> String {
        view::render_page(
            title,
            container_id,
            &self.board.render_controls(),
            &self.board.render_list(),
        )
    }
}
