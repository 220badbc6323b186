use recipe_board::catalog;
use recipe_board::{visible, Difficulty, Filter, Recipe, RecipeId, Sort, Step};

fn recipe(id: u32, title: &str, time: u32, difficulty: Difficulty) -> Recipe {
    Recipe {
        id: RecipeId(id),
        title: title.to_string(),
        time,
        difficulty,
        description: String::new(),
        category: String::new(),
        ingredients: vec![],
        steps: vec![Step::from("Cook")],
    }
}

fn sample() -> Vec<Recipe> {
    vec![
        recipe(1, "Spaghetti Carbonara", 25, Difficulty::Easy),
        recipe(2, "Chicken Tikka Masala", 45, Difficulty::Medium),
        recipe(3, "beef wellington", 120, Difficulty::Hard),
        recipe(4, "Avocado Toast", 5, Difficulty::Easy),
        recipe(5, "Omelette", 30, Difficulty::Easy),
        recipe(6, "Miso Soup", 25, Difficulty::Medium),
    ]
}

fn ids(recipes: &[&Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id.0).collect()
}

#[test]
fn test_quick_keeps_under_thirty_in_order() {
    let recipes = sample();
    let result = visible(&recipes, Filter::Quick, Sort::None);

    // 30 minutes exactly is not quick
    assert_eq!(ids(&result), vec![1, 4, 6]);
    assert!(result.iter().all(|r| r.time < 30));
}

#[test]
fn test_difficulty_filter_is_exact() {
    let recipes = sample();

    let easy = visible(&recipes, Filter::Difficulty(Difficulty::Easy), Sort::None);
    assert_eq!(ids(&easy), vec![1, 4, 5]);

    let hard = visible(&recipes, Filter::parse("hard"), Sort::None);
    assert_eq!(ids(&hard), vec![3]);
}

#[test]
fn test_all_and_unknown_filter_are_identity() {
    let recipes = sample();
    let all = visible(&recipes, Filter::All, Sort::None);
    let unknown = visible(&recipes, Filter::parse("vegetarian"), Sort::None);

    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ids(&unknown), ids(&all));
}

#[test]
fn test_sort_by_name_is_case_insensitive() {
    let recipes = sample();
    let result = visible(&recipes, Filter::All, Sort::Name);

    let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Avocado Toast",
            "beef wellington",
            "Chicken Tikka Masala",
            "Miso Soup",
            "Omelette",
            "Spaghetti Carbonara",
        ]
    );
}

#[test]
fn test_sort_by_name_places_accented_titles_by_base_letter() {
    let recipes = vec![
        recipe(1, "Zucchini Bread", 60, Difficulty::Easy),
        recipe(2, "Éclair", 90, Difficulty::Hard),
        recipe(3, "Crepes", 20, Difficulty::Easy),
        recipe(4, "Crème Brûlée", 50, Difficulty::Medium),
        recipe(5, "Apple Pie", 70, Difficulty::Medium),
    ];
    let result = visible(&recipes, Filter::All, Sort::Name);

    let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Apple Pie", "Crème Brûlée", "Crepes", "Éclair", "Zucchini Bread"]
    );
}

#[test]
fn test_sort_by_name_unaccented_before_accented() {
    let recipes = vec![
        recipe(1, "Pâté", 15, Difficulty::Easy),
        recipe(2, "Pate", 15, Difficulty::Easy),
        recipe(3, "Paté", 15, Difficulty::Easy),
    ];
    let result = visible(&recipes, Filter::All, Sort::Name);

    // Titles differing only by accent: none, then the first accented letter decides
    assert_eq!(ids(&result), vec![2, 3, 1]);
}

#[test]
fn test_sort_by_name_is_idempotent() {
    let recipes = sample();
    let once: Vec<Recipe> = visible(&recipes, Filter::All, Sort::Name)
        .into_iter()
        .cloned()
        .collect();
    let twice = visible(&once, Filter::All, Sort::Name);

    assert_eq!(ids(&twice), once.iter().map(|r| r.id.0).collect::<Vec<_>>());
}

#[test]
fn test_sort_by_time_is_stable() {
    let recipes = sample();
    let result = visible(&recipes, Filter::All, Sort::Time);

    // Carbonara and Miso Soup both take 25 minutes and keep their input order
    assert_eq!(ids(&result), vec![4, 1, 6, 5, 2, 3]);
}

#[test]
fn test_unknown_sort_keeps_filtered_order() {
    let recipes = sample();
    let result = visible(&recipes, Filter::Quick, Sort::parse("popularity"));
    assert_eq!(ids(&result), vec![1, 4, 6]);
}

#[test]
fn test_filter_applies_before_sort() {
    let recipes = sample();
    let result = visible(&recipes, Filter::Difficulty(Difficulty::Easy), Sort::Time);
    assert_eq!(ids(&result), vec![4, 1, 5]);
}

#[test]
fn test_input_is_not_reordered() {
    let recipes = sample();
    let before = recipes.clone();
    let _ = visible(&recipes, Filter::All, Sort::Time);
    let _ = visible(&recipes, Filter::All, Sort::Name);
    assert_eq!(recipes, before);
}

#[test]
fn test_builtin_scenario() {
    let recipes = catalog::builtin().unwrap();

    let quick = visible(&recipes, Filter::parse("quick"), Sort::parse("none"));
    assert_eq!(ids(&quick), vec![1]);

    let by_name = visible(&recipes, Filter::parse("all"), Sort::parse("name"));
    assert_eq!(by_name[0].title, "Chicken Tikka Masala");
    assert_eq!(by_name[1].title, "Spaghetti Carbonara");
}

#[test]
fn test_empty_collection() {
    let recipes: Vec<Recipe> = vec![];
    assert!(visible(&recipes, Filter::Quick, Sort::Name).is_empty());
}
