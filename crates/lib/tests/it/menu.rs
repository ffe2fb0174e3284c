//! Catalog invariants over the built-in data.

use messbot::{
    Error, MealCategory, MenuCatalog, Weekday, WeeklyMenuCatalog, menu::MenuError,
};

#[test]
fn test_every_category_has_dishes() {
    let menu = MenuCatalog::builtin();
    for category in MealCategory::ALL {
        let dishes = menu.dishes_for(category);
        assert!(!dishes.is_empty(), "{category} has no dishes");
        assert!(dishes.iter().all(|d| !d.trim().is_empty()));
    }
}

#[test]
fn test_every_weekday_has_items() {
    let weekly = WeeklyMenuCatalog::builtin();
    for category in MealCategory::ALL {
        for day in Weekday::ALL {
            assert!(
                !weekly.items_for(category, day).is_empty(),
                "{category} {day} is empty"
            );
        }
    }
}

#[test]
fn test_weekly_covers_menu() {
    let weekly = WeeklyMenuCatalog::builtin();
    weekly.check_covers(&MenuCatalog::builtin()).unwrap();
}

#[test]
fn test_week_iterates_monday_first() {
    let weekly = WeeklyMenuCatalog::builtin();
    let days: Vec<_> = weekly
        .week(MealCategory::Breakfast)
        .map(|(day, _)| day)
        .collect();
    assert_eq!(days.first(), Some(&Weekday::Monday));
    assert_eq!(days.last(), Some(&Weekday::Sunday));
    assert_eq!(days.len(), 7);
}

#[test]
fn test_unknown_names_surface_as_errors() {
    let menu = MenuCatalog::builtin();
    let err: Error = menu.dishes_for_name("brunch").unwrap_err().into();
    assert!(err.is_unknown_name());
    assert_eq!(err.module(), "menu");

    let weekly = WeeklyMenuCatalog::builtin();
    assert_eq!(
        weekly.items_for_names("lunch", "Caturday").unwrap_err(),
        MenuError::UnknownDay {
            name: "Caturday".to_string()
        }
    );
}

#[test]
fn test_catalogs_are_independent_tables() {
    // The weekly schedule lists items the suggestion pool does not.
    let menu = MenuCatalog::builtin();
    let weekly = WeeklyMenuCatalog::builtin();
    let tea = "Tea/Coffee";
    assert!(!menu.dishes_for(MealCategory::Breakfast).contains(tea));
    assert!(
        weekly
            .items_for(MealCategory::Breakfast, Weekday::Monday)
            .contains(tea)
    );
}
