//! Dispatcher behaviour through the public API.

use std::collections::HashSet;

use messbot::{
    Dispatcher, MealCategory, MenuCatalog,
    constants::{FALLBACK_REPLY, GREETING_REPLY, THANKS_REPLY},
    dispatcher::{Intent, KEYWORD_TABLE, classify},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::helpers::{extract_dish, extract_line_dish};

#[test]
fn test_respond_is_total_and_non_empty() {
    let dispatcher = Dispatcher::default();
    let inputs = [
        "",
        "   ",
        "\n\t",
        "ñandú 🍜 ∑",
        "\u{0}",
        "xyz123",
        "BREAKFAST",
    ];
    for input in inputs {
        assert!(!dispatcher.respond(input).is_empty(), "input {input:?}");
    }
}

#[test]
fn test_case_insensitive_breakfast() {
    let dispatcher = Dispatcher::default();
    let breakfast = dispatcher.menu().dishes_for(MealCategory::Breakfast);
    for input in ["BREAKFAST", "breakfast", "Breakfast please"] {
        let reply = dispatcher.respond(input);
        assert!(reply.starts_with("Your breakfast recommendation: "));
        assert!(breakfast.contains(extract_dish(&reply).unwrap()));
    }
}

#[test]
fn test_first_group_wins() {
    let dispatcher = Dispatcher::default();
    let reply = dispatcher.respond("breakfast lunch");
    assert!(reply.starts_with("Your breakfast recommendation: "));
    assert!(reply.ends_with("🌅"));
}

#[test]
fn test_each_meal_keyword_uses_its_list() {
    let dispatcher = Dispatcher::default();
    let mut rng = StdRng::seed_from_u64(11);
    let cases = [
        ("lunch", MealCategory::Lunch, "Your lunch recommendation: "),
        ("snacks", MealCategory::Snacks, "Your snack recommendation: "),
        ("evening", MealCategory::Snacks, "Your snack recommendation: "),
        ("dinner", MealCategory::Dinner, "Your dinner recommendation: "),
    ];
    for (input, category, prefix) in cases {
        let reply = dispatcher.respond_with(input, &mut rng);
        assert!(reply.starts_with(prefix), "{input}: {reply}");
        assert!(reply.ends_with(category.icon()));
        let dish = extract_dish(&reply).unwrap();
        assert!(dispatcher.menu().dishes_for(category).contains(dish));
    }
}

#[test]
fn test_random_draws_stay_in_list_and_vary() {
    let dispatcher = Dispatcher::default();
    let breakfast = dispatcher.menu().dishes_for(MealCategory::Breakfast);
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let reply = dispatcher.respond("breakfast");
        let dish = extract_dish(&reply).unwrap().to_string();
        assert!(breakfast.contains(&dish), "{dish} not on the breakfast list");
        seen.insert(dish);
    }
    assert!(seen.len() >= 2);
}

#[test]
fn test_draws_cover_whole_list() {
    let dispatcher = Dispatcher::default();
    let mut rng = StdRng::seed_from_u64(99);
    let dinner = dispatcher.menu().dishes_for(MealCategory::Dinner);
    let seen: HashSet<_> = (0..2000)
        .map(|_| extract_dish(&dispatcher.respond_with("dinner", &mut rng)).map(str::to_string))
        .collect::<Option<_>>()
        .unwrap();
    assert_eq!(seen.len(), dinner.len());
}

#[test]
fn test_fallback_exact() {
    let dispatcher = Dispatcher::default();
    assert_eq!(dispatcher.respond("xyz123"), FALLBACK_REPLY);
    assert_eq!(dispatcher.respond(""), FALLBACK_REPLY);
}

#[test]
fn test_greeting_and_thanks_exact() {
    let dispatcher = Dispatcher::default();
    assert_eq!(dispatcher.respond("hi"), GREETING_REPLY);
    assert_eq!(dispatcher.respond("hello"), GREETING_REPLY);
    assert_eq!(dispatcher.respond("thanks"), THANKS_REPLY);
    assert_eq!(dispatcher.respond("thank you"), THANKS_REPLY);
}

#[test]
fn test_all_meals_four_lines_in_order() {
    let dispatcher = Dispatcher::default();
    for input in ["menu", "show me all", "MENU"] {
        let reply = dispatcher.respond(input);
        let lines: Vec<_> = reply.lines().collect();
        assert_eq!(lines.len(), 4, "{reply}");
        for (line, category) in lines.iter().zip(MealCategory::ALL) {
            let dish = extract_line_dish(line, category).unwrap();
            assert!(dispatcher.menu().dishes_for(category).contains(dish));
        }
    }
}

#[test]
fn test_custom_catalog() {
    let mut map = std::collections::HashMap::new();
    for category in MealCategory::ALL {
        map.insert(
            category,
            messbot::DishList::new([format!("Only {category}")]).unwrap(),
        );
    }
    let dispatcher = Dispatcher::new(MenuCatalog::new(map).unwrap());
    assert_eq!(
        extract_dish(&dispatcher.respond("lunch")),
        Some("Only lunch")
    );
}

#[test]
fn test_keyword_table_order() {
    let intents: Vec<_> = KEYWORD_TABLE.iter().map(|rule| rule.intent).collect();
    assert_eq!(
        intents,
        vec![
            Intent::Meal(MealCategory::Breakfast),
            Intent::Meal(MealCategory::Lunch),
            Intent::Meal(MealCategory::Snacks),
            Intent::Meal(MealCategory::Dinner),
            Intent::AllMeals,
            Intent::Greeting,
            Intent::Thanks,
        ]
    );
    assert_eq!(classify("thank you, hello"), Intent::Greeting);
}
