use crate::model::{Difficulty, Recipe};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Recipes taking less than this many minutes count as quick
pub const QUICK_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Quick,
    Difficulty(Difficulty),
}

impl Filter {
    pub const CHOICES: [Filter; 5] = [
        Filter::All,
        Filter::Quick,
        Filter::Difficulty(Difficulty::Easy),
        Filter::Difficulty(Difficulty::Medium),
        Filter::Difficulty(Difficulty::Hard),
    ];

    /// Parse a filter token. Unrecognized tokens behave like `all`.
    pub fn parse(token: &str) -> Self {
        match token {
            "all" => Filter::All,
            "quick" => Filter::Quick,
            other => Difficulty::from_token(other)
                .map(Filter::Difficulty)
                .unwrap_or(Filter::All),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Quick => "quick",
            Filter::Difficulty(difficulty) => difficulty.as_str(),
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Filter::All => true,
            Filter::Quick => recipe.time < QUICK_MINUTES,
            Filter::Difficulty(difficulty) => recipe.difficulty == *difficulty,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    None,
    Name,
    Time,
}

impl Sort {
    pub const CHOICES: [Sort; 3] = [Sort::None, Sort::Name, Sort::Time];

    /// Parse a sort token. Unrecognized tokens leave the order untouched.
    pub fn parse(token: &str) -> Self {
        match token {
            "name" => Sort::Name,
            "time" => Sort::Time,
            _ => Sort::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::None => "none",
            Sort::Name => "name",
            Sort::Time => "time",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collation weights of one string, compared level by level.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    /// Base letters without accents or case, grouped by character class
    primary: Vec<(CharClass, char)>,
    /// Combining marks attached to each base letter
    secondary: Vec<Vec<char>>,
    /// Uppercase flag of each base letter
    tertiary: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Symbol
        }
    }
}

fn collation_key(s: &str) -> CollationKey {
    let mut key = CollationKey::default();

    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(marks) = key.secondary.last_mut() {
                marks.push(c);
            }
            continue;
        }

        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            key.primary.push((CharClass::of(lower), lower));
            key.secondary.push(Vec::new());
            key.tertiary.push(upper);
        }
    }

    key
}

/// Locale-aware title ordering.
///
/// Base letters decide first, ignoring accents and case. Ties go to the
/// unaccented form, then to lowercase, and only then to raw code points.
/// Whitespace sorts before symbols, symbols before digits, digits before letters.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

pub fn apply_filter(recipes: &[Recipe], filter: Filter) -> Vec<&Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

/// Reorder a filtered list. Both sorts are stable.
pub fn apply_sort(mut recipes: Vec<&Recipe>, sort: Sort) -> Vec<&Recipe> {
    match sort {
        Sort::Name => recipes.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        Sort::Time => recipes.sort_by_key(|r| r.time),
        Sort::None => {}
    }
    recipes
}

/// The recipes to display, in display order. `recipes` is never modified.
pub fn visible(recipes: &[Recipe], filter: Filter, sort: Sort) -> Vec<&Recipe> {
    apply_sort(apply_filter(recipes, filter), sort)
}
