use crate::error::BoardError;
use crate::model::Recipe;
use log::debug;

const BUILTIN_RECIPES: &str = include_str!("../data/recipes.json");

/// Decode the recipe collection compiled into the program.
pub fn builtin() -> Result<Vec<Recipe>, BoardError> {
    let recipes = from_json(BUILTIN_RECIPES)?;
    debug!("Loaded {} built-in recipes", recipes.len());
    Ok(recipes)
}

pub fn from_json(json: &str) -> Result<Vec<Recipe>, BoardError> {
    Ok(serde_json::from_str(json)?)
}
