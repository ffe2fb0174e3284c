//! Menu command - the weekly schedule of one meal category.

use messbot::{WeeklyMenuCatalog, menu::weekly::WeekView};

use crate::cli::MenuArgs;
use crate::output::{OutputFormat, print_json, print_table};

/// Run the menu command
pub fn run(args: &MenuArgs) -> anyhow::Result<()> {
    let weekly = WeeklyMenuCatalog::builtin();
    let category = args.category;

    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Human => {
            println!("{} {} Menu", category.icon(), category.label());
            println!();
            let rows: Vec<Vec<String>> = weekly
                .week(category)
                .filter(|(day, _)| args.day.is_none_or(|wanted| wanted == *day))
                .map(|(day, items)| vec![day.to_string(), items.items().join(", ")])
                .collect();
            print_table(&["DAY", "ITEMS"], &rows);
        }
        OutputFormat::Json => {
            let value = match args.day {
                Some(day) => serde_json::json!({
                    "category": category,
                    "day": day,
                    "items": weekly.items_for(category, day),
                }),
                None => serde_json::json!({
                    "category": category,
                    "week": WeekView(&weekly, category),
                }),
            };
            print_json(&value)?;
        }
    }

    Ok(())
}
