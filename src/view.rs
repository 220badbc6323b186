use crate::model::Recipe;
use crate::pipeline::{Filter, Sort};
use crate::steps;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A collapsible region of a recipe card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Ingredients,
    Steps,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Ingredients, Section::Steps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Ingredients => "ingredients",
            Section::Steps => "steps",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

/// Which sections of a card are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardVisibility {
    pub ingredients: bool,
    pub steps: bool,
}

impl CardVisibility {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Ingredients => self.ingredients,
            Section::Steps => self.steps,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        match section {
            Section::Ingredients => self.ingredients = visible,
            Section::Steps => self.steps = visible,
        }
    }
}

/// Label of a section's toggle button
pub fn toggle_label(section: Section, visible: bool) -> String {
    if visible {
        format!("Hide {}", section)
    } else {
        format!("Show {}", section)
    }
}

/// Render a card with every section collapsed.
pub fn render(recipe: &Recipe) -> String {
    render_card(recipe, CardVisibility::default())
}

pub fn render_card(recipe: &Recipe, visibility: CardVisibility) -> String {
    let mut html = String::new();

    let _ = write!(html, r#"<div class="recipe-card" data-id="{}">"#, recipe.id);
    let _ = write!(html, "<h3>{}</h3>", encode_text(&recipe.title));
    let _ = write!(
        html,
        r#"<div class="recipe-meta"><span>⏱ {} min</span><span class="difficulty {}">{}</span></div>"#,
        recipe.time,
        recipe.difficulty,
        recipe.difficulty
    );
    let _ = write!(html, "<p>{}</p>", encode_text(&recipe.description));

    let ingredients: String = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("<li>{}</li>", encode_text(ingredient)))
        .collect();
    write_section(
        &mut html,
        Section::Ingredients,
        visibility.ingredients,
        &format!("<ul>{}</ul>", ingredients),
    );

    write_section(
        &mut html,
        Section::Steps,
        visibility.steps,
        &steps::render(&recipe.steps, 0),
    );

    html.push_str("</div>");
    html
}

fn write_section(html: &mut String, section: Section, visible: bool, body: &str) {
    let _ = write!(
        html,
        r#"<button class="toggle-btn" data-toggle="{}">{}</button>"#,
        section,
        toggle_label(section, visible)
    );

    let mut classes = format!("{}-container", section);
    if section == Section::Steps {
        classes.push_str(" steps");
    }
    if visible {
        classes.push_str(" visible");
    }
    let _ = write!(html, r#"<div class="{}">{}</div>"#, classes, body);
}

/// Render every card of an already filtered and sorted list.
pub fn render_list<'a, I>(recipes: I, visibility: impl Fn(&Recipe) -> CardVisibility) -> String
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| render_card(recipe, visibility(recipe)))
        .collect()
}

/// Filter and sort button bars; the selected button of each bar is marked active.
pub fn render_controls(filter: Filter, sort: Sort) -> String {
    let mut html = String::from(r#"<div class="controls"><div class="filters">"#);
    for choice in Filter::CHOICES {
        write_control(&mut html, "filter", choice.as_str(), choice == filter);
    }
    html.push_str(r#"</div><div class="sorts">"#);
    for choice in Sort::CHOICES {
        write_control(&mut html, "sort", choice.as_str(), choice == sort);
    }
    html.push_str("</div></div>");
    html
}

fn write_control(html: &mut String, key: &str, value: &str, active: bool) {
    let class = if active { "active" } else { "" };
    let _ = write!(
        html,
        r#"<button class="{}" data-{}="{}">{}</button>"#,
        class, key, value, value
    );
}

/// Full document: controls followed by the recipe container.
pub fn render_page(title: &str, container_id: &str, controls: &str, list: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{title}</title></head><body><h1>{title}</h1>{controls}<div id="{id}">{list}</div></body></html>"#,
        title = encode_text(title),
        id = encode_double_quoted_attribute(container_id),
        controls = controls,
        list = list,
    )
}
