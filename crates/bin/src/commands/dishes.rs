//! Dishes command - the suggestion pools behind Chef Bot's replies.

use messbot::MenuCatalog;

use crate::cli::DishesArgs;
use crate::output::{OutputFormat, print_json, print_table};

/// Run the dishes command
pub fn run(args: &DishesArgs) -> anyhow::Result<()> {
    let menu = MenuCatalog::builtin();

    match (OutputFormat::from_json_flag(args.json), args.category) {
        (OutputFormat::Human, Some(category)) => {
            for dish in menu.dishes_for(category) {
                println!("{dish}");
            }
        }
        (OutputFormat::Human, None) => {
            let rows: Vec<Vec<String>> = menu
                .iter()
                .map(|(category, dishes)| {
                    vec![
                        format!("{} {}", category.icon(), category.label()),
                        dishes.items().join(", "),
                    ]
                })
                .collect();
            print_table(&["CATEGORY", "DISHES"], &rows);
        }
        (OutputFormat::Json, Some(category)) => print_json(menu.dishes_for(category))?,
        (OutputFormat::Json, None) => print_json(&menu)?,
    }

    Ok(())
}
