use log::{debug, warn};
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::BoardError;
use crate::model::{Recipe, RecipeId};
use crate::pipeline::{self, Filter, Sort};
use crate::view::{self, CardVisibility, Section};

/// The user's current filter and sort choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub filter: Filter,
    pub sort: Sort,
}

/// Discrete input events the board reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SetFilter(Filter),
    SetSort(Sort),
    ToggleSection { id: RecipeId, section: Section },
}

impl FromStr for Message {
    type Err = BoardError;

    /// Parse `filter <x>`, `sort <y>` or `toggle <id> <section>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["filter", token] => Ok(Message::SetFilter(Filter::parse(token))),
            ["sort", token] => Ok(Message::SetSort(Sort::parse(token))),
            ["toggle", id, section] => {
                let id = id
                    .parse::<u32>()
                    .map_err(|e| BoardError::InvalidEvent(format!("bad recipe id '{}': {}", id, e)))?;
                let section = section.parse::<Section>().map_err(BoardError::InvalidEvent)?;
                Ok(Message::ToggleSection {
                    id: RecipeId(id),
                    section,
                })
            }
            _ => Err(BoardError::InvalidEvent(s.trim().to_string())),
        }
    }
}

/// What the display has to change after a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Replace the whole recipe list; `controls` reflects the new selection
    List { controls: String, html: String },
    /// Show or hide one section of one card and relabel its toggle
    Section {
        id: RecipeId,
        section: Section,
        visible: bool,
        label: String,
    },
}

/// Recipe collection plus the UI state that drives what is shown
#[derive(Debug, Clone)]
pub struct Board {
    recipes: Vec<Recipe>,
    selection: Selection,
    expanded: HashMap<RecipeId, CardVisibility>,
}

impl Board {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::with_selection(recipes, Selection::default())
    }

    pub fn with_selection(recipes: Vec<Recipe>, selection: Selection) -> Self {
        Board {
            recipes,
            selection,
            expanded: HashMap::new(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn visible(&self) -> Vec<&Recipe> {
        pipeline::visible(&self.recipes, self.selection.filter, self.selection.sort)
    }

    pub fn visibility(&self, id: RecipeId) -> CardVisibility {
        self.expanded.get(&id).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, id: RecipeId, section: Section) -> bool {
        self.visibility(id).get(section)
    }

    pub fn label(&self, id: RecipeId, section: Section) -> String {
        view::toggle_label(section, self.is_visible(id, section))
    }

    pub fn render_controls(&self) -> String {
        view::render_controls(self.selection.filter, self.selection.sort)
    }

    pub fn render_list(&self) -> String {
        view::render_list(self.visible(), |recipe| self.visibility(recipe.id))
    }

    /// Apply one message and describe the resulting display change.
    pub fn update(&mut self, message: Message) -> Result<Update, BoardError> {
        match message {
            Message::SetFilter(filter) => {
                self.selection.filter = filter;
                Ok(self.rebuild())
            }
            Message::SetSort(sort) => {
                self.selection.sort = sort;
                Ok(self.rebuild())
            }
            Message::ToggleSection { id, section } => self.toggle(id, section),
        }
    }

    // Every card is re-created on a list change, so all sections collapse.
    fn rebuild(&mut self) -> Update {
        self.expanded.clear();
        let html = self.render_list();
        debug!(
            "Showing {} recipes (filter: {}, sort: {})",
            self.visible().len(),
            self.selection.filter,
            self.selection.sort
        );
        Update::List {
            controls: self.render_controls(),
            html,
        }
    }

    fn toggle(&mut self, id: RecipeId, section: Section) -> Result<Update, BoardError> {
        if !self.visible().iter().any(|recipe| recipe.id == id) {
            warn!("Ignoring toggle of {} on recipe {} which is not displayed", section, id);
            return Err(BoardError::UnknownRecipe(id));
        }

        let card = self.expanded.entry(id).or_default();
        let visible = !card.get(section);
        card.set(section, visible);
        debug!("Recipe {} {} visible: {}", id, section, visible);

        Ok(Update::Section {
            id,
            section,
            visible,
            label: view::toggle_label(section, visible),
        })
    }
}
